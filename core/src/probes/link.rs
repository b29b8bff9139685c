//! Physical and administrative link state.

use netsonde_common::tooling::{NetTooling, ToolingError};

/// Carrier flag in the interface flag list, present only when a cable
/// (or radio association) is actually detected.
const CARRIER_MARKER: &str = "LOWER_UP";
/// Administrative state as printed by the link report.
const ADMIN_UP_MARKER: &str = "state UP";

/// Two independent facts about the link; neither implies the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkInfo {
    pub physical_link_up: bool,
    pub link_state_up: bool,
}

pub fn probe(tools: &impl NetTooling, interface: &str) -> Result<LinkInfo, ToolingError> {
    let output = tools.link_status(interface)?;
    if output.trim().is_empty() {
        return Err(ToolingError::EmptyOutput { tool: "link status" });
    }
    Ok(parse(&output))
}

pub fn parse(output: &str) -> LinkInfo {
    LinkInfo {
        physical_link_up: output.contains(CARRIER_MARKER),
        link_state_up: output.contains(ADMIN_UP_MARKER),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
