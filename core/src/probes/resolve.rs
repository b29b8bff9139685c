//! Name resolution check.
//!
//! One lookup for a fixed well-known hostname; success is "any non-empty
//! answer came back". The answer's content is never validated, and an
//! unreachable resolver is indistinguishable from a name that does not
//! exist.

use netsonde_common::tooling::NetTooling;
use tracing::warn;

pub fn probe(tools: &impl NetTooling, hostname: &str) -> bool {
    match tools.name_lookup(hostname) {
        Ok(output) => !output.trim().is_empty(),
        Err(err) => {
            warn!("name lookup for {hostname} failed: {err}");
            false
        }
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
