//! The diagnostic pipeline and its verdict logic.
//!
//! Five probes run strictly in order, each feeding the accumulating
//! [`Report`], and the pipeline stops at the first disqualifying finding:
//!
//! ```text
//! route -> link state -> (speed) -> address -> name resolution -> OK
//!             |                        |              |
//!             v                        v              v
//!   "no physical link"          "no ip address"  "dns failed"
//!   "link down"
//! ```
//!
//! No error escapes: a probe that cannot run degrades to its negative
//! finding and the run still ends with a sealed report the caller can
//! render unconditionally.

use netsonde_common::config::Config;
use netsonde_common::report::{
    REASON_DNS_FAILED, REASON_LINK_DOWN, REASON_NO_IP_ADDRESS, REASON_NO_PHYSICAL_LINK, Report,
};
use netsonde_common::tooling::NetTooling;
use tracing::{info, warn};

use crate::probes::{address, link, resolve, route, speed};
use crate::probes::{address::AddressInfo, link::LinkInfo, route::RouteInfo};

/// Executes one full diagnostic pass and returns the sealed report.
pub fn run(cfg: &Config, tools: &impl NetTooling) -> Report {
    let route_info = route::probe(tools, &cfg.route_target).unwrap_or_else(|err| {
        warn!("route discovery failed, falling back to {}: {err}", cfg.fallback_interface);
        RouteInfo::default()
    });

    // A run without routing information still probes something: the
    // configured fallback interface stands in for the undiscovered one.
    let interface = route_info
        .interface
        .unwrap_or_else(|| cfg.fallback_interface.clone());
    info!("probing interface {interface}");

    let mut report = Report::new(interface);
    report.gateway = route_info.gateway;

    let link_info = link::probe(tools, &report.interface).unwrap_or_else(|err| {
        warn!("link state unreadable, treating as no link: {err}");
        LinkInfo::default()
    });
    report.physical_link_up = link_info.physical_link_up;
    report.link_state_up = link_info.link_state_up;

    if !report.physical_link_up {
        return report.fail(REASON_NO_PHYSICAL_LINK);
    }
    if !report.link_state_up {
        return report.fail(REASON_LINK_DOWN);
    }

    report.link_speed = speed::probe(tools, &report.interface);

    let address_info = address::probe(tools, &report.interface).unwrap_or_else(|err| {
        warn!("address listing unreadable, treating as unaddressed: {err}");
        AddressInfo::default()
    });
    report.ip_address = address_info.address;
    report.ip_source = address_info.source;

    if !address_info.present {
        return report.fail(REASON_NO_IP_ADDRESS);
    }

    report.dns_ok = resolve::probe(tools, &cfg.lookup_host);
    if !report.dns_ok {
        return report.fail(REASON_DNS_FAILED);
    }

    report.pass()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
