use crate::utils::error::{IpsetError, Result};

/// `192.168.24.0/24` -> (`192.168.24.0`, 24)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrParts {
    pub net_addr: String,
    pub prefix_len: i32,
}

/// Splits on the last '/'. Only the prefix length is parsed; the address part
/// is everything before that slash and is returned as-is (`a/b/24` gives
/// `a/b`, not `a`). Without any '/', the whole string is parsed as prefix.
pub fn split_cidr(cidr: &str) -> Result<CidrParts> {
    let (net_addr, suffix) = cidr.rsplit_once('/').unwrap_or((cidr, cidr));

    let prefix_len = suffix
        .parse::<i32>()
        .map_err(|source| IpsetError::InvalidCidr {
            cidr: cidr.to_string(),
            source,
        })?;

    Ok(CidrParts {
        net_addr: net_addr.to_string(),
        prefix_len,
    })
}
