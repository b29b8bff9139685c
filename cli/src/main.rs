mod commands;
mod indicator;
mod terminal;

use commands::{CommandLine, check};
use netsonde_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.log_level)?;

    let cfg = Config {
        fallback_interface: commands.interface,
        route_target: commands.target,
        lookup_host: commands.lookup,
    };

    check::check(&cfg, commands.quiet)
}
