use anyhow::Result;
use ipset_configmap::domain::model::{MacAddressList, NetList};
use ipset_configmap::{create_config_map_params, get_net_name, IpsetError};

fn load_fixtures() -> Result<(NetList, MacAddressList)> {
    let nets = serde_json::from_str(include_str!("fixtures/netlist.json"))?;
    let macs = serde_json::from_str(include_str!("fixtures/maclist.json"))?;
    Ok((nets, macs))
}

#[test]
fn test_end_to_end_single_network_single_role() -> Result<()> {
    let net_list: NetList = serde_json::from_value(serde_json::json!({
        "items": [{
            "metadata": {"name": "ctlplane"},
            "spec": {"cidr": "192.168.24.0/24"},
            "status": {"roleReservations": {
                "Controller": {
                    "addToPredictableIPs": true,
                    "reservations": [{"hostname": "controller-0", "ip": "192.168.24.9"}]
                }
            }}
        }]
    }))?;

    let params = create_config_map_params(&net_list, &MacAddressList::default())?;
    let value = serde_json::to_value(&params)?;

    let ctlplane = &value["NetworksMap"]["ctlplane"];
    assert_eq!(ctlplane["Cidr"], "192.168.24.0/24");
    assert_eq!(ctlplane["NetAddr"], "192.168.24.0");
    assert_eq!(ctlplane["CidrSuffix"], 24);

    let node = &value["RolesMap"]["Controller"]["Nodes"]["controller-0"];
    assert_eq!(node["Index"], 0);
    assert_eq!(
        node["IPaddr"]["ctlplane"],
        serde_json::json!({
            "IPaddr": "192.168.24.9",
            "IPAddrURI": "192.168.24.9",
            "IPAddrSubnet": "192.168.24.9/24",
            "Subnet": "192.168.24.0/24"
        })
    );

    Ok(())
}

#[test]
fn test_fixture_build() -> Result<()> {
    let (net_list, mac_list) = load_fixtures()?;
    let params = create_config_map_params(&net_list, &mac_list)?;

    // internalapi 正規化為 internal_api
    assert_eq!(params.networks_map.len(), 2);
    let internal_api = &params.networks_map["internal_api"];
    assert_eq!(internal_api.name, get_net_name("internal_api"));
    assert_eq!(internal_api.cidr_suffix, 64);
    assert_eq!(internal_api.vlan, 20);

    assert!(!params.roles_map.contains_key("ControlPlane"));

    let controller = &params.roles_map["Controller"];
    assert_eq!(controller.networks.len(), 2);
    assert_eq!(controller.nodes.len(), 2);
    assert!(!controller.nodes.contains_key("controller-1"));
    assert_eq!(controller.nodes["controller-0"].index, 0);
    assert_eq!(controller.nodes["controller-2"].index, 1);

    let controller_0 = &controller.nodes["controller-0"];
    assert_eq!(
        controller_0.ip_addr["internal_api"].ip_addr_uri,
        "[fd00:fd00:fd00:2000::15]"
    );
    assert_eq!(
        controller_0.ovn_static_bridge_mappings["datacentre"],
        "fa:16:3a:00:00:11"
    );
    assert_eq!(
        controller_0.ovn_static_bridge_mappings["external"],
        "fa:16:3a:00:00:12"
    );
    assert_eq!(
        controller.nodes["controller-2"].ovn_static_bridge_mappings["datacentre"],
        "fa:16:3a:00:00:03"
    );

    Ok(())
}

#[test]
fn test_malformed_cidr_does_not_panic() -> Result<()> {
    let net_list: NetList = serde_json::from_value(serde_json::json!({
        "items": [{"metadata": {"name": "ctlplane"}, "spec": {"cidr": "badcidr"}}]
    }))?;

    let failure = create_config_map_params(&net_list, &MacAddressList::default())
        .expect_err("malformed CIDR must fail the build");

    assert!(matches!(failure.source, IpsetError::InvalidCidr { .. }));
    assert!(failure.partial.networks_map.is_empty());
    Ok(())
}

#[test]
fn test_output_is_stable_across_builds() -> Result<()> {
    let (net_list, mac_list) = load_fixtures()?;

    let first = serde_json::to_string(&create_config_map_params(&net_list, &mac_list)?)?;
    let second = serde_json::to_string(&create_config_map_params(&net_list, &mac_list)?)?;

    assert_eq!(first, second);
    Ok(())
}
