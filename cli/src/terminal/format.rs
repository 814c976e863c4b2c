use crate::terminal::colors;
use colored::*;
use pulsr_common::monitor::status::{DisplayTag, RowView};
use std::net::{IpAddr, Ipv6Addr};

pub type Detail = (String, ColoredString);

pub fn tag_color(tag: DisplayTag) -> Color {
    match tag {
        DisplayTag::Active => colors::ACTIVE,
        DisplayTag::Unreachable => colors::UNREACHABLE,
        DisplayTag::ProbeError => colors::PROBE_ERROR,
        DisplayTag::Checking => colors::CHECKING,
        DisplayTag::Unknown => colors::UNKNOWN,
    }
}

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    let first_byte = ipv6_addr.octets()[0];
    if (0x20..=0x3F).contains(&first_byte) {
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

/// Labels and colors an address the way the rest of the output does.
pub fn address_to_detail(address: &str) -> Detail {
    match address.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => ("IPv4".to_string(), address.color(colors::IPV4_ADDR)),
        Ok(IpAddr::V6(ipv6_addr)) => (
            ipv6_to_type_str(&ipv6_addr).to_string(),
            address.color(colors::IPV6_ADDR),
        ),
        Err(_) => ("Addr".to_string(), address.normal()),
    }
}

pub fn row_to_details(row: &RowView) -> Vec<Detail> {
    vec![
        ("Sensor".to_string(), row.sensor.color(colors::TEXT_DEFAULT)),
        address_to_detail(&row.address),
        ("Status".to_string(), row.status.color(tag_color(row.tag)).bold()),
    ]
}

/// One-line form used while a pass is running.
pub fn row_to_line(row: &RowView) -> String {
    format!(
        "{} {} {} {}",
        row.station.color(colors::PRIMARY),
        row.sensor.color(colors::TEXT_DEFAULT),
        address_to_detail(&row.address).1,
        row.status.color(tag_color(row.tag)).bold()
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
