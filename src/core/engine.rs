use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct IpsetEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> IpsetEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ipset config map build...");

        // Extract
        tracing::info!("Reading network and MAC reservation lists...");
        let inventory = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} networks and {} MAC reservation sources",
            inventory.net_list.items.len(),
            inventory.mac_list.items.len()
        );

        // Transform
        tracing::info!("Building config map...");
        let params = self.pipeline.transform(inventory).await?;
        tracing::info!(
            "Built {} networks, {} roles",
            params.networks_map.len(),
            params.roles_map.len()
        );

        // Load
        tracing::info!("Writing config map...");
        let output_path = self.pipeline.load(params).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
