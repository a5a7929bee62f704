//! # MAC Table Parser
//!
//! Turns the raw text of a `show mac address-table` listing into
//! [`MacRecord`]s.
//!
//! Each line is searched for an optional numeric VLAN tag, a MAC address made
//! of three groups of four hex digits (optionally separated by `.`, `-`, `:`
//! or `|`), a learned-via token and a trailing interface token. Anything else
//! the switch prints (banners, column headers, totals, blank lines) simply
//! does not match and is dropped, as are the switch's own `CPU` entries.

use std::sync::OnceLock;

use macsweep_common::network::record::MacRecord;
use regex::Regex;
use tracing::debug;

const MAC_TABLE_PATTERN: &str = r"(\d*)\s*((?:[0-9a-fA-F]{4}[.\-:|]?){3})\s*(\w*)\s*(.*)";

static MAC_TABLE_RE: OnceLock<Regex> = OnceLock::new();

fn mac_table_regex() -> &'static Regex {
    MAC_TABLE_RE.get_or_init(|| Regex::new(MAC_TABLE_PATTERN).expect("invalid MAC table pattern"))
}

/// Parses every line of a MAC address table, keeping input order.
///
/// Lines that do not look like a table entry and entries learned on the
/// `CPU` port produce no record, so the result is never longer than `lines`.
pub fn parse_mac_table<S: AsRef<str>>(lines: &[S]) -> Vec<MacRecord> {
    let records: Vec<MacRecord> = lines
        .iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();

    debug!(
        "Parsed {} MAC entries from {} lines ({} skipped)",
        records.len(),
        lines.len(),
        lines.len() - records.len()
    );

    records
}

/// Parses a single line, returning `None` for noise and `CPU` entries.
pub fn parse_line(line: &str) -> Option<MacRecord> {
    let caps = mac_table_regex().captures(line)?;

    let record = MacRecord::new(
        &caps[1],
        &caps[2],
        &caps[3],
        caps[4].trim_end(),
    );

    if record.is_cpu_entry() {
        return None;
    }

    Some(record)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
