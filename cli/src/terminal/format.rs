use std::net::{IpAddr, Ipv6Addr};

use colored::*;

use crate::terminal::colors;
use crate::terminal::print::Detail;

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

/// One detail row per address, keyed by family.
///
/// Literals that do not parse are shown as-is under `Address`.
pub fn addresses_to_detail(addresses: &[String]) -> Vec<Detail> {
    addresses
        .iter()
        .map(|literal| match literal.parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => (String::from("IPv4"), literal.color(colors::IPV4_ADDR)),
            Ok(IpAddr::V6(ipv6_addr)) => (
                String::from(ipv6_to_type_str(&ipv6_addr)),
                literal.color(colors::IPV6_ADDR),
            ),
            Err(_) => (String::from("Address"), literal.color(colors::TEXT_DEFAULT)),
        })
        .collect()
}

pub fn bool_to_detail(key: &str, value: bool) -> Detail {
    let value: ColoredString = if value {
        "yes".color(colors::POSITIVE).bold()
    } else {
        "no".color(colors::NEGATIVE).bold()
    };
    (key.to_string(), value)
}
