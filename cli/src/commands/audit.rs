use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use macsweep_common::config::Config;
use macsweep_common::network::target::{Credentials, SwitchTarget};
use macsweep_core::audit::{AuditReport, AuditService};
use macsweep_core::enrich::{ProgressCallback, VendorEnricher};
use macsweep_core::session::SshConnector;
use macsweep_core::vendors::MacVendorsApi;

use crate::mprint;
use crate::terminal::{colors, format, print, prompt, spinner};

pub async fn audit(address: Option<String>, username: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let address: String = match address {
        Some(address) => address,
        None => prompt::prompt_line("IP address")?,
    };
    let username: String = match username {
        Some(username) => username,
        None => prompt::prompt_line("Username")?,
    };
    let password: String = prompt::prompt_password("Password")?;

    let target: SwitchTarget = SwitchTarget::new(address).with_port(cfg.port);
    let credentials: Credentials = Credentials::new(username, password);

    let vendors: MacVendorsApi = MacVendorsApi::new(&cfg.lookup_url, cfg.lookup_timeout)?;
    let service: AuditService = AuditService::new(
        Box::new(SshConnector::new(cfg.connect_timeout)),
        VendorEnricher::new(Box::new(vendors), cfg.lookup_failure),
        &cfg.output_dir,
    );

    print::header(&format!("auditing {}", target), cfg.quiet);

    let start_time: Instant = Instant::now();
    let pb = spinner::start(format!("Reading MAC table from {}...", target), cfg.quiet);
    let progress_pb = pb.clone();
    let on_progress: ProgressCallback = Box::new(move |done, total| {
        spinner::report_lookup_progress(&progress_pb, done, total)
    });

    let result = service.run(&target, &credentials, Some(on_progress)).await;
    spinner::finish();

    let report: AuditReport = result.with_context(|| format!("audit of {} failed", target))?;
    audit_ends(&report, start_time.elapsed(), cfg);
    Ok(())
}

fn audit_ends(report: &AuditReport, total_time: Duration, cfg: &Config) {
    if report.records.is_empty() {
        print::header("no entries", cfg.quiet);
        print::no_results();
    } else if cfg.quiet < 2 {
        print::header("mac address table", cfg.quiet);
        print_records(report);
    }

    print_summary(report, total_time, cfg);
}

fn print_records(report: &AuditReport) {
    for (idx, record) in report.records.iter().enumerate() {
        print::tree_head(idx, &format::record_title(record));
        print::as_tree_one_level(format::record_to_details(record));
        if idx + 1 != report.records.len() {
            mprint!();
        }
    }
}

fn print_summary(report: &AuditReport, total_time: Duration, cfg: &Config) {
    let records: ColoredString = format!("{} addresses", report.records.len()).bold().green();
    let resolved: ColoredString = format!("{} vendors", report.resolved_count()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Audit Complete: {records} with {resolved} identified in {total_time}")
        .color(colors::TEXT_DEFAULT);
    let path: String = format!("Report written to {}", report.output_path.display());

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            print::centerln(&path);
        }
        _ => {
            mprint!();
            mprint!(&output.to_string());
            mprint!(&path);
        }
    }
}
