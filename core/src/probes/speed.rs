//! Negotiated link speed, advisory only.
//!
//! Whatever happens here never changes the verdict; an unreadable speed is
//! simply reported as unknown.

use netsonde_common::tooling::NetTooling;
use tracing::debug;

const SPEED_LABEL: &str = "Speed:";

pub fn probe(tools: &impl NetTooling, interface: &str) -> Option<String> {
    match tools.link_settings(interface) {
        Ok(output) => parse(&output),
        Err(err) => {
            debug!("link speed unavailable for {interface}: {err}");
            None
        }
    }
}

/// First line carrying the `Speed:` label wins; a value naming `unknown`
/// in any casing counts as unavailable.
pub fn parse(output: &str) -> Option<String> {
    for line in output.lines() {
        let Some(value) = line.trim_start().strip_prefix(SPEED_LABEL) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() || value.to_ascii_lowercase().contains("unknown") {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
