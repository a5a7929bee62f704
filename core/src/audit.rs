//! # Switch Audit Service
//!
//! Implements the "audit a switch" use case.
//!
//! The pipeline runs strictly in order, each stage consuming the full output
//! of the previous one:
//! 1. **Establish**: open a session through the [`SessionConnector`].
//! 2. **Fetch**: run the MAC table command once and release the session.
//! 3. **Parse**: extract [`MacRecord`]s from the raw lines.
//! 4. **Enrich**: resolve vendors through the [`VendorEnricher`].
//! 5. **Export**: write the CSV report.
//!
//! Any stage error aborts the run; the report is only written after every
//! record has been enriched.

use std::path::{Path, PathBuf};

use macsweep_common::error::AuditResult;
use macsweep_common::network::record::MacRecord;
use macsweep_common::network::target::{Credentials, SwitchTarget};
use macsweep_common::session::SessionConnector;
use tracing::info;

use crate::enrich::{ProgressCallback, VendorEnricher};
use crate::export::export_records;
use crate::fetch::fetch_mac_table;
use crate::parser::parse_mac_table;

/// Outcome of a successful audit.
#[derive(Debug)]
pub struct AuditReport {
    /// Lines the switch returned, including headers and noise.
    pub raw_line_count: usize,
    /// Enriched records, in table order.
    pub records: Vec<MacRecord>,
    pub output_path: PathBuf,
}

impl AuditReport {
    pub fn resolved_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_vendor()).count()
    }
}

pub struct AuditService {
    connector: Box<dyn SessionConnector>,
    enricher: VendorEnricher,
    output_dir: PathBuf,
}

impl AuditService {
    pub fn new(
        connector: Box<dyn SessionConnector>,
        enricher: VendorEnricher,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            connector,
            enricher,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Audits `target` end to end and writes its report.
    pub async fn run(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        on_progress: Option<ProgressCallback>,
    ) -> AuditResult<AuditReport> {
        // 1. Establish
        let session = self.connector.connect(target, credentials).await?;

        // 2. Fetch, consuming the session
        let lines: Vec<String> = fetch_mac_table(session, target.dialect).await?;

        // 3. Parse
        let mut records: Vec<MacRecord> = parse_mac_table(&lines);
        info!("Found {} MAC entries on {}", records.len(), target);

        // 4. Enrich
        self.enricher
            .enrich(&mut records, on_progress.as_ref())
            .await?;

        // 5. Export
        let output_path: PathBuf = export_records(&records, &target.address, &self.output_dir)?;

        Ok(AuditReport {
            raw_line_count: lines.len(),
            records,
            output_path,
        })
    }
}
