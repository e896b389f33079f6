// ABOUTME: CIDR arithmetic for deployment management networks
// ABOUTME: Derives subnet, gateway, netmask, and prefix length from an IPv4 CIDR string

use std::net::Ipv4Addr;

use serde::Serialize;

use super::error::{ContextError, Result};

/// Network values derived from a management-network CIDR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNetwork {
    /// First three dotted octets of the network address (`10.196.130`).
    pub subnet: String,
    /// First usable host address, network address + 1.
    pub gateway: String,
    /// Dotted-decimal netmask (`255.255.255.192`).
    pub netmask: String,
    /// Prefix length as given in the CIDR.
    pub netprefix: u8,
}

/// Derive subnet, gateway, netmask, and prefix length from an IPv4 CIDR in
/// `a.b.c.d/n` form.
///
/// Host bits set in the address are tolerated; the network address is computed
/// by masking. Prefixes shorter than /24 are rejected because the three-octet
/// `subnet` value would silently truncate, and /31 and /32 are rejected because
/// they have no usable host range for the gateway.
pub fn derive(cidr: &str) -> Result<DerivedNetwork> {
    let (addr_part, prefix_part) = cidr.split_once('/').ok_or_else(|| {
        ContextError::InvalidNetwork(format!("'{}' is not in a.b.c.d/n form", cidr))
    })?;

    let addr: Ipv4Addr = addr_part.parse().map_err(|_| {
        ContextError::InvalidNetwork(format!("'{}' is not a valid IPv4 address", addr_part))
    })?;

    let netprefix: u8 = prefix_part
        .parse()
        .ok()
        .filter(|p| *p <= 32)
        .ok_or_else(|| {
            ContextError::InvalidNetwork(format!("'{}' is not a valid prefix length", prefix_part))
        })?;

    if netprefix < 24 {
        return Err(ContextError::UnsupportedNetwork(format!(
            "prefix /{} is shorter than /24, cannot derive a three-octet subnet",
            netprefix
        )));
    }
    if netprefix > 30 {
        return Err(ContextError::UnsupportedNetwork(format!(
            "/{} network has no usable host range",
            netprefix
        )));
    }

    // netprefix is in 24..=30 here, so the shift is always well defined
    let mask: u32 = u32::MAX << (32 - netprefix);
    let network = u32::from(addr) & mask;

    let octets = Ipv4Addr::from(network).octets();
    let subnet = format!("{}.{}.{}", octets[0], octets[1], octets[2]);
    let gateway = Ipv4Addr::from(network + 1).to_string();
    let netmask = Ipv4Addr::from(mask).to_string();

    Ok(DerivedNetwork {
        subnet,
        gateway,
        netmask,
        netprefix,
    })
}
