#![cfg(test)]

use netsonde_common::config::Config;
use netsonde_common::report::{IpSource, Report, Status};
use netsonde_core::diagnostic;

use super::util::ScriptedTooling;

/// Status/reason coupling that must hold after every run, whatever the
/// scripted environment looked like.
fn assert_report_invariants(report: &Report) {
    let all_good = report.physical_link_up
        && report.link_state_up
        && report.ip_address.is_some()
        && report.dns_ok;
    assert_eq!(
        report.status == Status::Ok,
        all_good,
        "verdict must match the conjunction of mandatory findings: {report:?}"
    );
    assert_eq!(
        report.reason.is_empty(),
        report.status == Status::Ok,
        "reason must be empty exactly on a pass: {report:?}"
    );
}

#[test]
fn healthy_wired_network_passes() {
    let tooling = ScriptedTooling::healthy();
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Ok);
    assert_eq!(report.reason, "");
    assert_eq!(report.interface, "eth0");
    assert_eq!(report.gateway.as_deref(), Some("192.168.1.1"));
    assert!(report.physical_link_up);
    assert!(report.link_state_up);
    assert_eq!(report.link_speed.as_deref(), Some("1000Mb/s"));
    assert_eq!(report.ip_address.as_deref(), Some("192.168.1.50"));
    assert_eq!(report.ip_source, IpSource::Static);
    assert!(report.dns_ok);
    assert_report_invariants(&report);
}

#[test]
fn unplugged_cable_reports_no_physical_link() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.link = Ok(
        "2: eth0: <NO-CARRIER,BROADCAST,MULTICAST,UP> mtu 1500 qdisc fq_codel state DOWN \
         mode DEFAULT group default qlen 1000\n"
            .to_string(),
    );
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Fail);
    assert_eq!(report.reason, "no physical link");
    // Probes downstream of the link gate never ran.
    assert_eq!(report.link_speed, None);
    assert_eq!(report.ip_address, None);
    assert_eq!(report.ip_source, IpSource::None);
    assert!(!report.dns_ok);
    assert_report_invariants(&report);
}

#[test]
fn administratively_down_reports_link_down() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.link = Ok(
        "2: eth0: <BROADCAST,MULTICAST,LOWER_UP> mtu 1500 qdisc fq_codel state DOWN \
         mode DEFAULT group default qlen 1000\n"
            .to_string(),
    );
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Fail);
    assert_eq!(report.reason, "link down");
    assert!(report.physical_link_up);
    assert!(!report.link_state_up);
    assert_report_invariants(&report);
}

#[test]
fn missing_address_reports_no_ip_address() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.addresses = Ok(
        "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP \
         group default qlen 1000\n    link/ether 3c:7c:3f:1a:2b:3c brd ff:ff:ff:ff:ff:ff\n"
            .to_string(),
    );
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Fail);
    assert_eq!(report.reason, "no ip address");
    assert_eq!(report.ip_address, None);
    assert_eq!(report.ip_source, IpSource::None);
    // Advisory speed was still collected before the address gate.
    assert_eq!(report.link_speed.as_deref(), Some("1000Mb/s"));
    assert_report_invariants(&report);
}

#[test]
fn empty_dns_answer_reports_dns_failed() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.answer = Ok(String::new());
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Fail);
    assert_eq!(report.reason, "dns failed");
    assert!(!report.dns_ok);
    assert_eq!(report.ip_address.as_deref(), Some("192.168.1.50"));
    assert_report_invariants(&report);
}

#[test]
fn dhcp_lease_classifies_ip_source() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.addresses = Ok(
        "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP \
         group default qlen 1000\n    inet 192.168.1.50/24 brd 192.168.1.255 scope global \
         dynamic noprefixroute eth0\n       valid_lft 85919sec preferred_lft 85919sec\n"
            .to_string(),
    );
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Ok);
    assert_eq!(report.ip_source, IpSource::Dhcp);
    assert_report_invariants(&report);
}

#[test]
fn missing_ip_binary_still_yields_a_report() {
    let tooling = ScriptedTooling {
        route: Err(()),
        link: Err(()),
        settings: Err(()),
        addresses: Err(()),
        answer: Err(()),
    };
    let cfg = Config {
        fallback_interface: String::from("wlan0"),
        ..Config::default()
    };
    let report = diagnostic::run(&cfg, &tooling);

    // A dead environment degrades to the first mandatory gate, on the
    // configured fallback interface, without any error escaping.
    assert_eq!(report.status, Status::Fail);
    assert_eq!(report.reason, "no physical link");
    assert_eq!(report.interface, "wlan0");
    assert_eq!(report.gateway, None);
    assert_report_invariants(&report);
}

#[test]
fn unknown_speed_does_not_change_the_verdict() {
    let mut tooling = ScriptedTooling::healthy();
    tooling.settings = Ok("Settings for eth0:\n\tSpeed: Unknown!\n\tDuplex: Unknown! (255)\n"
        .to_string());
    let report = diagnostic::run(&Config::default(), &tooling);

    assert_eq!(report.status, Status::Ok);
    assert_eq!(report.link_speed, None);
    assert_report_invariants(&report);
}
