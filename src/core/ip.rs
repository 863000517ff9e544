use crate::domain::model::{IpAssignment, NetworkDefinition};
use std::net::IpAddr;

/// 4-in-6 位址（::ffff:a.b.c.d）視為 IPv4
pub fn is_ipv6(addr: &str) -> bool {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_none(),
        _ => false,
    }
}

/// IPv6 加上中括號，例如 [2001:db8:24::15]
pub fn uri_form(addr: &str) -> String {
    if is_ipv6(addr) {
        format!("[{}]", addr)
    } else {
        addr.to_string()
    }
}

pub fn format_ip(addr: &str, prefix_len: i32, cidr: &str) -> IpAssignment {
    IpAssignment {
        ip_addr: addr.to_string(),
        ip_addr_uri: uri_form(addr),
        ip_addr_subnet: format!("{}/{}", addr, prefix_len),
        subnet: cidr.to_string(),
    }
}

pub fn format_ip_for_network(addr: &str, network: &NetworkDefinition) -> IpAssignment {
    format_ip(addr, network.cidr_suffix, &network.cidr)
}
