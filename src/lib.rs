pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::configmap::create_config_map_params;
pub use crate::core::names::{get_net_name, get_net_name_lower};
pub use crate::core::{engine::IpsetEngine, pipeline::IpsetPipeline};
pub use adapters::storage::LocalStorage;
pub use domain::model::ConfigMapParams;
pub use utils::error::{BuildFailure, IpsetError, Result};
