use crate::domain::model::{ConfigMapParams, MacAddressList, NetList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn net_list_path(&self) -> &str;
    fn mac_list_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn pretty_output(&self) -> bool {
        true
    }
}

/// 萃取的兩份輸入集合
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub net_list: NetList,
    pub mac_list: MacAddressList,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Inventory>;
    async fn transform(&self, inventory: Inventory) -> Result<ConfigMapParams>;
    async fn load(&self, params: ConfigMapParams) -> Result<String>;
}
