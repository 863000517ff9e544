use crate::core::assembler::RoleAssembler;
use crate::core::registry::{NetworkRegistry, DEFAULT_MTU};
use crate::domain::model::{ConfigMapParams, MacAddressList, NetList};
use crate::utils::error::BuildFailure;

/// 由網路清單與 MAC 保留清單建立 ipset config map 參數。
///
/// On a malformed CIDR the build stops and the failure carries whatever
/// networks and roles were assembled before it. That partial output is not
/// consistent and must not be rendered.
pub fn create_config_map_params(
    net_list: &NetList,
    mac_list: &MacAddressList,
) -> Result<ConfigMapParams, BuildFailure> {
    let mut registry = NetworkRegistry::new();
    let mut assembler = RoleAssembler::new();

    for net in &net_list.items {
        let network = match registry.register(&net.metadata.name, &net.spec, DEFAULT_MTU) {
            Ok(network) => network,
            Err(source) => {
                tracing::error!(
                    "Failed to register network '{}' after {} networks: {}",
                    net.metadata.name,
                    registry.len(),
                    source
                );
                return Err(BuildFailure {
                    partial: ConfigMapParams {
                        networks_map: registry.into_map(),
                        roles_map: assembler.into_roles(),
                    },
                    source,
                });
            }
        };

        assembler.add_network(&network, &net.status.role_reservations, mac_list);
    }

    let params = ConfigMapParams {
        networks_map: registry.into_map(),
        roles_map: assembler.into_roles(),
    };

    tracing::info!(
        "Built config map: {} networks, {} roles, {} nodes",
        params.networks_map.len(),
        params.roles_map.len(),
        params.node_count()
    );

    Ok(params)
}
