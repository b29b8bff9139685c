//! The five probes of the diagnostic pipeline.
//!
//! Each probe pairs a pure parser (raw tool text in, structured fields out)
//! with a thin wrapper that fetches the text through
//! [`NetTooling`](netsonde_common::tooling::NetTooling). Parsers never touch
//! the operating system, so every parsing rule is tested against canned
//! output without running real commands.
//!
//! Probes report absence, never panic: a marker that is missing from the
//! output leaves the matching field unset, and malformed output is treated
//! the same as "value not found".

pub mod address;
pub mod link;
pub mod resolve;
pub mod route;
pub mod speed;
