//! # MAC Table Record
//!
//! One row of a switch's MAC address forwarding table, optionally enriched
//! with the vendor that owns the address's OUI.

/// Value written in place of a vendor when the lookup had no answer.
pub const VENDOR_NOT_FOUND: &str = "NOT FOUND";

/// Port token switches use for their own management addresses.
pub const CPU_INTERFACE: &str = "CPU";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacRecord {
    /// VLAN tag as printed by the switch; empty when the table has none.
    pub vlan: String,
    /// MAC address in the switch's own notation (`0019.d2c4.1a2b`, `0019-d2c4-1a2b`, ...).
    pub mac_address: String,
    /// How the entry was learned, e.g. `DYNAMIC` or `STATIC`.
    pub learned_via: String,
    /// Port the address was seen on.
    pub interface: String,
    /// Vendor name, `None` until enrichment has run.
    pub company: Option<String>,
}

impl MacRecord {
    pub fn new(
        vlan: impl Into<String>,
        mac_address: impl Into<String>,
        learned_via: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        Self {
            vlan: vlan.into(),
            mac_address: mac_address.into(),
            learned_via: learned_via.into(),
            interface: interface.into(),
            company: None,
        }
    }

    /// Stores the lookup outcome as received. Missing or whitespace-only names
    /// become [`VENDOR_NOT_FOUND`].
    pub fn set_company(&mut self, company: Option<String>) {
        debug_assert!(self.company.is_none(), "company set twice for {}", self.mac_address);
        let company = company
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| VENDOR_NOT_FOUND.to_string());
        self.company = Some(company);
    }

    /// The vendor as it appears in reports.
    pub fn company_or_not_found(&self) -> &str {
        self.company.as_deref().unwrap_or(VENDOR_NOT_FOUND)
    }

    /// True once enrichment attached a real vendor name.
    pub fn has_vendor(&self) -> bool {
        matches!(self.company.as_deref(), Some(name) if name != VENDOR_NOT_FOUND)
    }

    pub fn is_cpu_entry(&self) -> bool {
        self.interface == CPU_INTERFACE
    }
}
