use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ---- 輸入：網路清單 ----

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetList {
    #[serde(default)]
    pub items: Vec<Network>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: NetworkSpec,
    #[serde(default)]
    pub status: NetworkStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    pub cidr: String,
    #[serde(default)]
    pub allocation_start: String,
    #[serde(default)]
    pub allocation_end: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub vlan: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    #[serde(default)]
    pub role_reservations: BTreeMap<String, RoleReservation>,
}

/// 單一角色在某網路上的保留位址
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleReservation {
    #[serde(default, rename = "addToPredictableIPs")]
    pub add_to_predictable_ips: bool,
    #[serde(default)]
    pub reservations: Vec<IpReservation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpReservation {
    pub hostname: String,
    pub ip: String,
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub deleted: bool,
}

// ---- 輸入：MAC 保留清單 ----

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacAddressList {
    #[serde(default)]
    pub items: Vec<MacAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacAddress {
    #[serde(default)]
    pub status: MacAddressStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacAddressStatus {
    /// hostname -> 各網路的 MAC
    #[serde(default)]
    pub mac_reservations: BTreeMap<String, MacReservation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacReservation {
    #[serde(default)]
    pub reservations: BTreeMap<String, String>,
}

// ---- 輸出：交給模板渲染的結構 ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkDefinition {
    pub name: String,
    pub name_lower: String,
    pub cidr: String,
    pub net_addr: String,
    pub cidr_suffix: i32,
    #[serde(rename = "MTU")]
    pub mtu: u32,
    pub allocation_start: String,
    pub allocation_end: String,
    pub gateway: String,
    pub vlan: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAssignment {
    #[serde(rename = "IPaddr")]
    pub ip_addr: String,
    #[serde(rename = "IPAddrURI")]
    pub ip_addr_uri: String,
    #[serde(rename = "IPAddrSubnet")]
    pub ip_addr_subnet: String,
    #[serde(rename = "Subnet")]
    pub subnet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAssignment {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "IPaddr")]
    pub ip_addr: BTreeMap<String, IpAssignment>,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "VIP")]
    pub vip: bool,
    #[serde(rename = "OVNStaticBridgeMappings")]
    pub ovn_static_bridge_mappings: BTreeMap<String, String>,
}

/// 角色只持有網路定義的共享參照，不複製
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleDefinition {
    pub name: String,
    pub name_lower: String,
    pub networks: BTreeMap<String, Arc<NetworkDefinition>>,
    pub nodes: BTreeMap<String, NodeAssignment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMapParams {
    #[serde(rename = "NetworksMap")]
    pub networks_map: BTreeMap<String, Arc<NetworkDefinition>>,
    #[serde(rename = "RolesMap")]
    pub roles_map: BTreeMap<String, RoleDefinition>,
}

impl ConfigMapParams {
    pub fn node_count(&self) -> usize {
        self.roles_map.values().map(|role| role.nodes.len()).sum()
    }
}
