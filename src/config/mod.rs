pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_FILE: &str = "ipset-configmap.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ipset-configmap")]
#[command(about = "Build the per-role network/IP config map from network and MAC reservations")]
pub struct CliConfig {
    #[arg(long, help = "JSON file holding the network list")]
    pub net_list: String,

    #[arg(long, default_value = "", help = "JSON file holding the MAC reservation list")]
    pub mac_list: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, help = "Write compact JSON instead of pretty-printed")]
    pub compact: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn net_list_path(&self) -> &str {
        &self.net_list
    }

    fn mac_list_path(&self) -> &str {
        &self.mac_list
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn pretty_output(&self) -> bool {
        !self.compact
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("net_list", &self.net_list)?;
        validation::validate_file_extension("net_list", &self.net_list, &["json"])?;
        if !self.mac_list.is_empty() {
            validation::validate_file_extension("mac_list", &self.mac_list, &["json"])?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::parse_from([
            "ipset-configmap",
            "--net-list",
            "nets.json",
            "--mac-list",
            "macs.json",
        ]);

        assert_eq!(config.net_list_path(), "nets.json");
        assert_eq!(config.mac_list_path(), "macs.json");
        assert_eq!(config.output_file(), DEFAULT_OUTPUT_FILE);
        assert!(config.pretty_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_json_input() {
        let config = CliConfig::parse_from(["ipset-configmap", "--net-list", "nets.yaml"]);
        assert!(config.validate().is_err());
    }
}
