pub mod check;

use clap::Parser;

#[derive(Parser)]
#[command(name = "netsonde")]
#[command(about = "One-button field probe for local internet connectivity.")]
pub struct CommandLine {
    /// Interface to probe when route discovery cannot name one
    #[arg(long, default_value = "eth0")]
    pub interface: String,

    /// External address used to resolve the outbound route
    #[arg(long, default_value = "8.8.8.8")]
    pub target: String,

    /// Hostname used to confirm name resolution
    #[arg(long, default_value = "google.com")]
    pub lookup: String,

    /// Only print the verdict line, skip the field breakdown
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level
    #[arg(short, long, default_value_t = tracing::Level::WARN)]
    pub log_level: tracing::Level,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
