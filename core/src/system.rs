//! Production tooling backed by the system networking utilities.
//!
//! Everything here scrapes human-readable output from `ip`, `ethtool` and
//! `dig`. None of those formats is a stable interface, which is why this
//! is the only module allowed to spawn processes: swap it out and the rest
//! of the pipeline never notices.

use std::process::Command;

use netsonde_common::tooling::{NetTooling, ToolingError};

/// Invokes the real commands, one blocking short-lived process per call.
pub struct SystemTooling;

impl SystemTooling {
    fn run(tool: &'static str, program: &str, args: &[&str]) -> Result<String, ToolingError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ToolingError::Invocation { tool, source })?;

        // Exit status is deliberately ignored: a failed command leaves its
        // markers out of stdout, which the parsers already treat as absence.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl NetTooling for SystemTooling {
    fn route_lookup(&self, target: &str) -> Result<String, ToolingError> {
        Self::run("ip route", "ip", &["route", "get", target])
    }

    fn link_status(&self, interface: &str) -> Result<String, ToolingError> {
        Self::run("ip link", "ip", &["link", "show", "dev", interface])
    }

    fn link_settings(&self, interface: &str) -> Result<String, ToolingError> {
        Self::run("ethtool", "ethtool", &[interface])
    }

    fn address_listing(&self, interface: &str) -> Result<String, ToolingError> {
        Self::run("ip addr", "ip", &["-4", "addr", "show", "dev", interface])
    }

    fn name_lookup(&self, hostname: &str) -> Result<String, ToolingError> {
        // +short keeps the output to bare answer records, so "non-empty
        // stdout" and "the name resolved" coincide.
        Self::run("dig", "dig", &["+short", hostname])
    }
}
