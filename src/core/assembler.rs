use crate::core::ip::format_ip_for_network;
use crate::core::macs::mac_mappings_for_host;
use crate::domain::model::{
    MacAddressList, NetworkDefinition, NodeAssignment, RoleDefinition, RoleReservation,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 依角色彙整節點與其各網路的 IP。
///
/// Index is taken from the per role-network counter of whichever network pass
/// first creates the node; later passes only add IP assignments. Role
/// reservations are iterated in key order, so the result is reproducible for
/// identical input but still depends on network list order.
#[derive(Debug, Default)]
pub struct RoleAssembler {
    roles: BTreeMap<String, RoleDefinition>,
}

impl RoleAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_network(
        &mut self,
        network: &Arc<NetworkDefinition>,
        role_reservations: &BTreeMap<String, RoleReservation>,
        mac_list: &MacAddressList,
    ) {
        for (role_name, group) in role_reservations {
            if !group.add_to_predictable_ips {
                tracing::debug!(
                    "Skipping role '{}' on network '{}': not a predictable IP group",
                    role_name,
                    network.name_lower
                );
                continue;
            }

            let role = self.roles.entry(role_name.clone()).or_insert_with(|| {
                tracing::debug!("Created role '{}'", role_name);
                RoleDefinition {
                    name: role_name.clone(),
                    name_lower: role_name.to_lowercase(),
                    networks: BTreeMap::new(),
                    nodes: BTreeMap::new(),
                }
            });

            role.networks
                .entry(network.name_lower.clone())
                .or_insert_with(|| Arc::clone(network));

            let mut hostname_index = 0;
            for reservation in group.reservations.iter().filter(|r| !r.deleted) {
                let node = role
                    .nodes
                    .entry(reservation.hostname.clone())
                    .or_insert_with(|| {
                        tracing::debug!(
                            "Created node '{}' in role '{}' with index {}",
                            reservation.hostname,
                            role_name,
                            hostname_index
                        );
                        NodeAssignment {
                            index: hostname_index,
                            ip_addr: BTreeMap::new(),
                            hostname: reservation.hostname.clone(),
                            vip: reservation.vip,
                            ovn_static_bridge_mappings: mac_mappings_for_host(
                                &reservation.hostname,
                                mac_list,
                            ),
                        }
                    });

                node.ip_addr
                    .entry(network.name_lower.clone())
                    .or_insert_with(|| format_ip_for_network(&reservation.ip, network));

                hostname_index += 1;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn roles(&self) -> &BTreeMap<String, RoleDefinition> {
        &self.roles
    }

    pub fn into_roles(self) -> BTreeMap<String, RoleDefinition> {
        self.roles
    }
}
