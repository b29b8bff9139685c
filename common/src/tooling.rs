//! The **abstraction** over external networking utilities.
//!
//! Every probe reaches the operating system exclusively through this trait:
//! one short-lived command invocation in, raw human-readable text out.
//! Parsing stays on the caller's side, so probe logic is unit-testable with
//! canned strings and the scraping strategy can be swapped for a
//! machine-readable source without touching the orchestrator.
//!
//! **Architectural note:** the text formats behind these methods are not a
//! stable contract. Tool versions and locales change them; treat every
//! parser downstream of this trait as best-effort.

use thiserror::Error;

/// Failure at the command boundary, before any parsing happens.
#[derive(Debug, Error)]
pub enum ToolingError {
    /// The command could not be started at all.
    #[error("failed to invoke {tool}: {source}")]
    Invocation {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The command ran but produced nothing to parse.
    #[error("{tool} produced no output")]
    EmptyOutput { tool: &'static str },
}

/// The five external capabilities a diagnostic run consumes.
///
/// Each method returns the raw textual output of the underlying utility.
pub trait NetTooling {
    /// Route the kernel would use to reach `target`.
    fn route_lookup(&self, target: &str) -> Result<String, ToolingError>;

    /// Link-status report for `interface` (carrier and admin state).
    fn link_status(&self, interface: &str) -> Result<String, ToolingError>;

    /// Negotiated link settings for `interface` (speed line included).
    fn link_settings(&self, interface: &str) -> Result<String, ToolingError>;

    /// IPv4 address listing for `interface`.
    fn address_listing(&self, interface: &str) -> Result<String, ToolingError>;

    /// Answer section of a DNS lookup for `hostname`.
    fn name_lookup(&self, hostname: &str) -> Result<String, ToolingError>;
}
