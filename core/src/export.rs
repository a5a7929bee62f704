//! CSV export of enriched MAC records.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use macsweep_common::error::{AuditError, AuditResult};
use macsweep_common::network::record::MacRecord;
use tracing::info;

pub const CSV_HEADER: [&str; 5] = ["COMPANY", "INTERFACE", "LEARNED_VIA", "MAC_ADDRESS", "VLAN"];

/// `mac_information-<switch_address>.csv`
pub fn report_file_name(switch_address: &str) -> String {
    format!("mac_information-{}.csv", switch_address)
}

/// Writes the header and one row per record to `sink`.
pub fn write_records<W: Write>(records: &[MacRecord], sink: W) -> csv::Result<()> {
    let mut writer: Writer<W> = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.company_or_not_found(),
            &record.interface,
            &record.learned_via,
            &record.mac_address,
            &record.vlan,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the report for `switch_address` in `output_dir`.
///
/// Returns the path of the written file.
pub fn export_records(
    records: &[MacRecord],
    switch_address: &str,
    output_dir: &Path,
) -> AuditResult<PathBuf> {
    let path: PathBuf = output_dir.join(report_file_name(switch_address));

    let file = File::create(&path).map_err(|e| AuditError::export(&path, e))?;
    write_records(records, file).map_err(|e| AuditError::export(&path, e))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
