use colored::*;
use macsweep_common::network::record::MacRecord;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Tree label for a record: the port it was learned on.
pub fn record_title(record: &MacRecord) -> String {
    if record.interface.is_empty() {
        String::from("Unknown port")
    } else {
        record.interface.clone()
    }
}

pub fn record_to_details(record: &MacRecord) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::with_capacity(4);

    if !record.vlan.is_empty() {
        details.push(("VLAN".to_string(), record.vlan.normal()));
    }

    details.push((
        "MAC".to_string(),
        record.mac_address.color(colors::MAC_ADDR),
    ));
    details.push(("Learned".to_string(), record.learned_via.normal()));

    let vendor: ColoredString = if record.has_vendor() {
        record.company_or_not_found().color(colors::VENDOR)
    } else {
        record.company_or_not_found().color(colors::NOT_FOUND)
    };
    details.push(("Vendor".to_string(), vendor));

    details
}
