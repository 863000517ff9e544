pub mod assembler;
pub mod cidr;
pub mod configmap;
pub mod engine;
pub mod ip;
pub mod macs;
pub mod names;
pub mod pipeline;
pub mod registry;

pub use crate::domain::model::ConfigMapParams;
pub use crate::domain::ports::{ConfigProvider, Inventory, Pipeline, Storage};
pub use crate::utils::error::Result;
