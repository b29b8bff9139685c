use colored::*;

use crate::indicator;
use crate::terminal::{colors, format, print};
use netsonde_common::config::Config;
use netsonde_common::report::{Report, Status};
use netsonde_core::diagnostic;
use netsonde_core::system::SystemTooling;

pub fn check(cfg: &Config, quiet: bool) -> anyhow::Result<()> {
    let indicator = indicator::detect();
    indicator.busy();

    let report = diagnostic::run(cfg, &SystemTooling);

    indicator.verdict(report.status);
    render(&report, quiet);
    Ok(())
}

fn render(report: &Report, quiet: bool) {
    if quiet {
        print::print(&verdict_line(report));
        return;
    }

    print::header("link diagnostic");

    let details = format::report_details(report);
    print::initialize_key_width(details.iter().map(|(key, _)| key.as_str()));
    for (key, value) in details {
        print::aligned_line(&key, value);
    }

    print::fat_separator();
    print::centerln(&verdict_line(report));
}

fn verdict_line(report: &Report) -> String {
    let verdict: ColoredString = match report.status {
        Status::Ok => report.status.to_string().color(colors::PASS).bold(),
        Status::Fail => report.status.to_string().color(colors::FAIL).bold(),
    };
    if report.reason.is_empty() {
        format!("{verdict}")
    } else {
        format!("{verdict} ({})", report.reason)
    }
}
