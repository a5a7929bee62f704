use std::fs;

use macsweep_common::config::LookupFailurePolicy;
use macsweep_common::error::AuditError;
use macsweep_common::network::target::{Credentials, SwitchTarget};
use macsweep_core::audit::AuditService;
use macsweep_core::enrich::VendorEnricher;
use macsweep_core::export::report_file_name;

use super::fakes::{CISCO_TABLE, FakeSwitch, FakeVendors};

fn creds(password: &str) -> Credentials {
    Credentials::new("netops", password)
}

#[tokio::test]
async fn audit_writes_one_row_per_attached_device() {
    let dir = tempfile::tempdir().unwrap();
    let (switch, switch_log) = FakeSwitch::new(CISCO_TABLE);
    let (vendors, lookups) = FakeVendors::new(&[
        ("0019.d2c4.1a2b", "Cisco Systems"),
        ("00a0.c914.c829", "Intel Corporation"),
    ]);
    let service = AuditService::new(
        Box::new(switch),
        VendorEnricher::new(Box::new(vendors), LookupFailurePolicy::Abort),
        dir.path(),
    );

    let report = service
        .run(&SwitchTarget::new("10.0.0.1"), &creds("cisco"), None)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.resolved_count(), 2);
    assert_eq!(report.raw_line_count, CISCO_TABLE.lines().count());
    assert_eq!(report.output_path, dir.path().join("mac_information-10.0.0.1.csv"));

    let log = switch_log.lock().unwrap();
    assert_eq!(log.logins, vec!["netops"]);
    assert_eq!(log.commands, vec!["show mac address-table"]);
    assert_eq!(log.disconnects, 1);

    assert_eq!(
        *lookups.lock().unwrap(),
        vec!["0019.d2c4.1a2b", "00a0.c914.c829", "5254.0012.3456"]
    );

    let csv = fs::read_to_string(&report.output_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "COMPANY,INTERFACE,LEARNED_VIA,MAC_ADDRESS,VLAN",
            "Cisco Systems,Gi0/1,DYNAMIC,0019.d2c4.1a2b,1",
            "Intel Corporation,Gi0/2,DYNAMIC,00a0.c914.c829,10",
            "NOT FOUND,Po1,STATIC,5254.0012.3456,20",
        ]
    );
    assert!(lines[1..].iter().all(|row| row.split(',').count() == 5));
}

#[tokio::test]
async fn rejected_login_produces_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let (switch, switch_log) = FakeSwitch::new(CISCO_TABLE);
    let (vendors, lookups) = FakeVendors::new(&[]);
    let service = AuditService::new(
        Box::new(switch),
        VendorEnricher::new(Box::new(vendors), LookupFailurePolicy::Abort),
        dir.path(),
    );

    let result = service
        .run(&SwitchTarget::new("10.0.0.1"), &creds("wrong"), None)
        .await;

    assert!(matches!(result, Err(AuditError::Connection { .. })));
    assert!(switch_log.lock().unwrap().commands.is_empty());
    assert!(lookups.lock().unwrap().is_empty());
    assert!(!dir.path().join(report_file_name("10.0.0.1")).exists());
}

#[tokio::test]
async fn lookup_outage_aborts_before_export() {
    let dir = tempfile::tempdir().unwrap();
    let (switch, switch_log) = FakeSwitch::new(CISCO_TABLE);
    let (mut vendors, lookups) = FakeVendors::new(&[]);
    vendors.down = true;
    let service = AuditService::new(
        Box::new(switch),
        VendorEnricher::new(Box::new(vendors), LookupFailurePolicy::Abort),
        dir.path(),
    );

    let result = service
        .run(&SwitchTarget::new("sw-core-1"), &creds("cisco"), None)
        .await;

    assert!(matches!(result, Err(AuditError::Lookup { .. })));
    assert_eq!(lookups.lock().unwrap().len(), 1);
    assert_eq!(switch_log.lock().unwrap().disconnects, 1);
    assert!(!dir.path().join(report_file_name("sw-core-1")).exists());
}

#[tokio::test]
async fn lookup_outage_degrades_to_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (switch, _) = FakeSwitch::new(CISCO_TABLE);
    let (mut vendors, lookups) = FakeVendors::new(&[("0019.d2c4.1a2b", "Cisco Systems")]);
    vendors.down = true;
    let service = AuditService::new(
        Box::new(switch),
        VendorEnricher::new(Box::new(vendors), LookupFailurePolicy::Degrade),
        dir.path(),
    );

    let report = service
        .run(&SwitchTarget::new("sw-core-1"), &creds("cisco"), None)
        .await
        .unwrap();

    assert_eq!(lookups.lock().unwrap().len(), 3);
    assert_eq!(report.resolved_count(), 0);
    let csv = fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(csv.lines().filter(|l| l.starts_with("NOT FOUND,")).count(), 3);
}

#[tokio::test]
async fn empty_table_still_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let (switch, _) = FakeSwitch::new("");
    let (vendors, lookups) = FakeVendors::new(&[]);
    let service = AuditService::new(
        Box::new(switch),
        VendorEnricher::new(Box::new(vendors), LookupFailurePolicy::Abort),
        dir.path(),
    );

    let report = service
        .run(&SwitchTarget::new("10.9.9.9"), &creds("cisco"), None)
        .await
        .unwrap();

    assert!(report.records.is_empty());
    assert!(lookups.lock().unwrap().is_empty());
    let csv = fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(csv, "COMPANY,INTERFACE,LEARNED_VIA,MAC_ADDRESS,VLAN\n");
}
