use async_trait::async_trait;

use crate::error::AuditResult;

/// Defines the contract for resolving device manufacturers from MAC addresses.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Retrieves the vendor name for a given MAC address.
    ///
    /// # Arguments
    /// * `mac_address` - The MAC address to lookup, in the switch's notation.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The name of the vendor if found.
    /// * `Ok(None)` - If the service does not know the OUI.
    /// * `Err(_)` - If the service could not be asked or answered garbage.
    async fn get_vendor(&self, mac_address: &str) -> AuditResult<Option<String>>;
}
