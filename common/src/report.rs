//! # Diagnostic Report Model
//!
//! The single record produced by one diagnostic run.
//!
//! A [`Report`] is assembled stage by stage and sealed with [`Report::pass`]
//! or [`Report::fail`], which keep the status/reason coupling intact:
//! the reason is non-empty exactly when the verdict is [`Status::Fail`].
//! Fields belonging to stages that never ran keep their defaults.

use std::fmt;

pub const REASON_NO_PHYSICAL_LINK: &str = "no physical link";
pub const REASON_LINK_DOWN: &str = "link down";
pub const REASON_NO_IP_ADDRESS: &str = "no ip address";
pub const REASON_DNS_FAILED: &str = "dns failed";

/// Overall verdict of a diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// How the bound IPv4 address was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpSource {
    /// Address carried the kernel's `dynamic` flag (DHCP-like lease).
    Dhcp,
    /// Address present without the dynamic flag.
    Static,
    /// No address bound, or the address probe never ran.
    #[default]
    None,
}

impl fmt::Display for IpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpSource::Dhcp => write!(f, "dhcp"),
            IpSource::Static => write!(f, "static"),
            IpSource::None => write!(f, "none"),
        }
    }
}

/// The result record of one diagnostic pass over one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    /// Short failure phrase; empty on a passing run.
    pub reason: String,
    /// Interface the run examined (resolved or fallback).
    pub interface: String,
    pub physical_link_up: bool,
    pub link_state_up: bool,
    /// Negotiated speed, e.g. "1000Mb/s". Advisory; absent when unknown.
    pub link_speed: Option<String>,
    pub ip_address: Option<String>,
    pub gateway: Option<String>,
    pub dns_ok: bool,
    pub ip_source: IpSource,
}

impl Report {
    /// Fresh record with every probed field at its pipeline default.
    ///
    /// The record is not meaningful until sealed with [`Report::pass`] or
    /// [`Report::fail`].
    pub fn new(interface: String) -> Self {
        Self {
            status: Status::Fail,
            reason: String::new(),
            interface,
            physical_link_up: false,
            link_state_up: false,
            link_speed: None,
            ip_address: None,
            gateway: None,
            dns_ok: false,
            ip_source: IpSource::None,
        }
    }

    /// Seals the record as a failure with one of the fixed reason phrases.
    pub fn fail(mut self, reason: &str) -> Self {
        self.status = Status::Fail;
        self.reason = reason.to_string();
        self
    }

    /// Seals the record as a passing run.
    pub fn pass(mut self) -> Self {
        self.status = Status::Ok;
        self.reason.clear();
        self
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
