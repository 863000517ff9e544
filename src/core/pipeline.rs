use crate::core::configmap::create_config_map_params;
use crate::core::{ConfigMapParams, ConfigProvider, Inventory, Pipeline, Storage};
use crate::domain::model::{MacAddressList, NetList};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

pub struct IpsetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> IpsetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("Reading {}", path);
        let data = self.storage.read_file(path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn output_file_path(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_file())
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for IpsetPipeline<S, C> {
    async fn extract(&self) -> Result<Inventory> {
        let net_list: NetList = self.read_json(self.config.net_list_path()).await?;

        // MAC 保留清單可為空字串，表示沒有 OVN static bridge mapping
        let mac_list: MacAddressList = if self.config.mac_list_path().is_empty() {
            tracing::debug!("No MAC reservation list configured");
            MacAddressList::default()
        } else {
            self.read_json(self.config.mac_list_path()).await?
        };

        Ok(Inventory { net_list, mac_list })
    }

    async fn transform(&self, inventory: Inventory) -> Result<ConfigMapParams> {
        let params = create_config_map_params(&inventory.net_list, &inventory.mac_list)?;
        Ok(params)
    }

    async fn load(&self, params: ConfigMapParams) -> Result<String> {
        let output_path = self.output_file_path();

        let json = if self.config.pretty_output() {
            serde_json::to_vec_pretty(&params)?
        } else {
            serde_json::to_vec(&params)?
        };

        tracing::debug!("Writing config map ({} bytes) to {}", json.len(), output_path);
        self.storage.write_file(&output_path, &json).await?;

        Ok(output_path)
    }
}
