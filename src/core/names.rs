//! 網路名稱正規化與顯示名稱對照

pub const INTERNAL_API_NAME: &str = "internal_api";
pub const STORAGE_MGMT_NAME: &str = "storage_mgmt";

/// 已知的網路角色，對應固定的顯示名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownNetwork {
    Ctlplane,
    InternalApi,
    External,
    Storage,
    StorageMgmt,
    Tenant,
    Management,
}

impl KnownNetwork {
    pub const ALL: [KnownNetwork; 7] = [
        KnownNetwork::Ctlplane,
        KnownNetwork::InternalApi,
        KnownNetwork::External,
        KnownNetwork::Storage,
        KnownNetwork::StorageMgmt,
        KnownNetwork::Tenant,
        KnownNetwork::Management,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|net| net.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            KnownNetwork::Ctlplane => "ctlplane",
            KnownNetwork::InternalApi => INTERNAL_API_NAME,
            KnownNetwork::External => "external",
            KnownNetwork::Storage => "storage",
            KnownNetwork::StorageMgmt => STORAGE_MGMT_NAME,
            KnownNetwork::Tenant => "tenant",
            KnownNetwork::Management => "management",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            KnownNetwork::Ctlplane => "Control",
            KnownNetwork::InternalApi => "InternalApi",
            KnownNetwork::External => "External",
            KnownNetwork::Storage => "Storage",
            KnownNetwork::StorageMgmt => "StorageMgmt",
            KnownNetwork::Tenant => "Tenant",
            KnownNetwork::Management => "Management",
        }
    }
}

/// 資源名稱不允許 '_'，這兩個網路以無分隔符號的拼法出現
pub fn canonical_net_name(raw: &str) -> &str {
    match raw {
        "internalapi" => INTERNAL_API_NAME,
        "storagemgmt" => STORAGE_MGMT_NAME,
        other => other,
    }
}

/// Unknown keys yield an empty string, never an error.
pub fn get_net_name(key: &str) -> &'static str {
    match KnownNetwork::from_key(key) {
        Some(net) => net.display_name(),
        None => {
            tracing::debug!("No display name known for network '{}'", key);
            ""
        }
    }
}

pub fn get_net_name_lower(key: &str) -> String {
    get_net_name(key).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_net_name() {
        assert_eq!(canonical_net_name("internalapi"), "internal_api");
        assert_eq!(canonical_net_name("storagemgmt"), "storage_mgmt");
        assert_eq!(canonical_net_name("internal_api"), "internal_api");
        assert_eq!(canonical_net_name("ctlplane"), "ctlplane");
        assert_eq!(canonical_net_name("custom-net"), "custom-net");
    }

    #[test]
    fn test_get_net_name() {
        assert_eq!(get_net_name("ctlplane"), "Control");
        assert_eq!(get_net_name("internal_api"), "InternalApi");
        assert_eq!(get_net_name("storage_mgmt"), "StorageMgmt");
        assert_eq!(get_net_name("management"), "Management");
        assert_eq!(get_net_name("unrecognized"), "");
        assert_eq!(get_net_name("datacentre"), "");
        // 只接受正規化後的 key
        assert_eq!(get_net_name("internalapi"), "");
    }

    #[test]
    fn test_get_net_name_lower() {
        assert_eq!(get_net_name_lower("storage_mgmt"), "storagemgmt");
        assert_eq!(get_net_name_lower("ctlplane"), "control");
        assert_eq!(get_net_name_lower("unrecognized"), "");
    }

    #[test]
    fn test_known_network_keys_round_trip() {
        for net in KnownNetwork::ALL {
            assert_eq!(KnownNetwork::from_key(net.key()), Some(net));
        }
    }
}
