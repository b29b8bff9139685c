use crate::terminal::colors;
use colored::*;
use netsonde_common::report::{Report, Status};

type Detail = (String, ColoredString);

/// Flattens the report into the key/value lines the terminal renders,
/// in pipeline order.
pub fn report_details(report: &Report) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Status".to_string(), status_value(report.status)),
        ("Interface".to_string(), report.interface.normal()),
        ("Physical Link".to_string(), bool_value(report.physical_link_up)),
        ("Link State".to_string(), bool_value(report.link_state_up)),
        ("Link Speed".to_string(), optional_value(&report.link_speed)),
        ("IP Address".to_string(), optional_value(&report.ip_address)),
        ("IP Source".to_string(), report.ip_source.to_string().normal()),
        ("Gateway".to_string(), optional_value(&report.gateway)),
        ("DNS".to_string(), bool_value(report.dns_ok)),
    ];

    if !report.reason.is_empty() {
        details.push(("Reason".to_string(), report.reason.color(colors::FAIL)));
    }

    details
}

fn status_value(status: Status) -> ColoredString {
    match status {
        Status::Ok => status.to_string().color(colors::PASS).bold(),
        Status::Fail => status.to_string().color(colors::FAIL).bold(),
    }
}

fn bool_value(flag: bool) -> ColoredString {
    if flag {
        "up".color(colors::PASS)
    } else {
        "down".color(colors::FAIL)
    }
}

fn optional_value(value: &Option<String>) -> ColoredString {
    match value {
        Some(value) => value.clone().normal(),
        None => "unknown".dimmed(),
    }
}
