use crate::core::cidr::split_cidr;
use crate::core::names::{canonical_net_name, get_net_name};
use crate::domain::model::{NetworkDefinition, NetworkSpec};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

// TODO: read a per-network MTU once NetworkSpec carries one
pub const DEFAULT_MTU: u32 = 1500;

/// 以正規化後的 key 去重的網路定義表，先註冊者為準
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: BTreeMap<String, Arc<NetworkDefinition>>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later registrations under an already known key return the existing
    /// definition and their attributes are ignored.
    pub fn register(
        &mut self,
        raw_name: &str,
        spec: &NetworkSpec,
        mtu: u32,
    ) -> Result<Arc<NetworkDefinition>> {
        let key = canonical_net_name(raw_name);

        if let Some(existing) = self.networks.get(key) {
            tracing::debug!("Network '{}' already registered, keeping first definition", key);
            return Ok(Arc::clone(existing));
        }

        let parts = split_cidr(&spec.cidr)?;
        let network = Arc::new(NetworkDefinition {
            name: get_net_name(key).to_string(),
            name_lower: key.to_string(),
            cidr: spec.cidr.clone(),
            net_addr: parts.net_addr,
            cidr_suffix: parts.prefix_len,
            mtu,
            allocation_start: spec.allocation_start.clone(),
            allocation_end: spec.allocation_end.clone(),
            gateway: spec.gateway.clone(),
            vlan: spec.vlan,
        });

        tracing::debug!("Registered network '{}' ({})", key, network.cidr);
        self.networks.insert(key.to_string(), Arc::clone(&network));
        Ok(network)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn into_map(self) -> BTreeMap<String, Arc<NetworkDefinition>> {
        self.networks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cidr: &str, vlan: i32) -> NetworkSpec {
        NetworkSpec {
            cidr: cidr.to_string(),
            allocation_start: "192.168.24.100".to_string(),
            allocation_end: "192.168.24.250".to_string(),
            gateway: "192.168.24.1".to_string(),
            vlan,
        }
    }

    #[test]
    fn test_register_decomposes_cidr() {
        let mut registry = NetworkRegistry::new();
        let net = registry
            .register("ctlplane", &spec("192.168.24.0/24", 0), DEFAULT_MTU)
            .unwrap();

        assert_eq!(net.name, "Control");
        assert_eq!(net.name_lower, "ctlplane");
        assert_eq!(net.net_addr, "192.168.24.0");
        assert_eq!(net.cidr_suffix, 24);
        assert_eq!(net.mtu, 1500);
        assert_eq!(net.gateway, "192.168.24.1");
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = NetworkRegistry::new();
        registry
            .register("internalapi", &spec("172.17.0.0/24", 20), DEFAULT_MTU)
            .unwrap();
        let second = registry
            .register("internal_api", &spec("172.18.0.0/16", 30), 9000)
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(second.cidr, "172.17.0.0/24");
        assert_eq!(second.vlan, 20);
        assert_eq!(second.mtu, 1500);
        assert_eq!(second.name, "InternalApi");
    }

    #[test]
    fn test_known_key_skips_cidr_parsing() {
        let mut registry = NetworkRegistry::new();
        registry
            .register("tenant", &spec("172.16.0.0/24", 50), DEFAULT_MTU)
            .unwrap();

        assert!(registry
            .register("tenant", &spec("badcidr", 50), DEFAULT_MTU)
            .is_ok());
    }

    #[test]
    fn test_malformed_cidr_is_not_registered() {
        let mut registry = NetworkRegistry::new();
        assert!(registry
            .register("storage", &spec("badcidr", 30), DEFAULT_MTU)
            .is_err());
        assert!(registry.into_map().is_empty());
    }
}
