//! Outbound route discovery.
//!
//! Asks the kernel which path it would use to reach a well-known external
//! address and extracts the egress interface, the next-hop gateway and the
//! source address it would stamp on outgoing packets.

use netsonde_common::tooling::{NetTooling, ToolingError};

const GATEWAY_MARKER: &str = "via";
const INTERFACE_MARKER: &str = "dev";
const SOURCE_MARKER: &str = "src";

/// What the routing table reveals about the outbound path.
///
/// Any field the output did not name stays unset; that is "unknown",
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteInfo {
    pub interface: Option<String>,
    pub gateway: Option<String>,
    pub source_address: Option<String>,
}

pub fn probe(tools: &impl NetTooling, target: &str) -> Result<RouteInfo, ToolingError> {
    let output = tools.route_lookup(target)?;
    if output.trim().is_empty() {
        return Err(ToolingError::EmptyOutput { tool: "route lookup" });
    }
    Ok(parse(&output))
}

/// Scans the route line pairwise: each recognized marker captures the token
/// immediately following it. Marker order does not matter and unrecognized
/// tokens are skipped.
pub fn parse(output: &str) -> RouteInfo {
    let mut info = RouteInfo::default();
    let mut tokens = output.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            GATEWAY_MARKER => info.gateway = tokens.next().map(str::to_owned),
            INTERFACE_MARKER => info.interface = tokens.next().map(str::to_owned),
            SOURCE_MARKER => info.source_address = tokens.next().map(str::to_owned),
            _ => {}
        }
    }

    info
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
