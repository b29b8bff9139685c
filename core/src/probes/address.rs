//! IPv4 address presence and provenance.

use netsonde_common::report::IpSource;
use netsonde_common::tooling::{NetTooling, ToolingError};

const INET_MARKER: &str = "inet";
const DYNAMIC_MARKER: &str = "dynamic";

/// Outcome of inspecting the interface's address listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInfo {
    pub present: bool,
    pub address: Option<String>,
    pub source: IpSource,
}

pub fn probe(tools: &impl NetTooling, interface: &str) -> Result<AddressInfo, ToolingError> {
    let output = tools.address_listing(interface)?;
    if output.trim().is_empty() {
        return Err(ToolingError::EmptyOutput {
            tool: "address listing",
        });
    }
    Ok(parse(&output))
}

/// The first `inet` line is authoritative; secondary addresses are ignored.
/// The address is the second token with any `/prefix` suffix stripped, and
/// a `dynamic` token on the same line marks a DHCP-style assignment.
pub fn parse(output: &str) -> AddressInfo {
    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(INET_MARKER) {
            continue;
        }
        let Some(raw_address) = tokens.next() else {
            return AddressInfo::default();
        };

        let address = match raw_address.split_once('/') {
            Some((ip, _prefix)) => ip,
            None => raw_address,
        };
        let source = if tokens.any(|token| token == DYNAMIC_MARKER) {
            IpSource::Dhcp
        } else {
            IpSource::Static
        };

        return AddressInfo {
            present: true,
            address: Some(address.to_string()),
            source,
        };
    }

    AddressInfo::default()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
