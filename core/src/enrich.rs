//! # Vendor Enrichment
//!
//! Attaches a vendor name to every parsed record, one lookup at a time and in
//! table order.

use macsweep_common::config::LookupFailurePolicy;
use macsweep_common::error::AuditResult;
use macsweep_common::network::record::MacRecord;
use macsweep_common::vendors::VendorRepository;
use tracing::{debug, warn};

/// Called after each record with `(done, total)`.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

pub struct VendorEnricher {
    vendor_repo: Box<dyn VendorRepository>,
    on_failure: LookupFailurePolicy,
}

impl VendorEnricher {
    pub fn new(vendor_repo: Box<dyn VendorRepository>, on_failure: LookupFailurePolicy) -> Self {
        Self {
            vendor_repo,
            on_failure,
        }
    }

    /// Sets `company` on every record.
    ///
    /// Under [`LookupFailurePolicy::Abort`] the first failed lookup is
    /// returned and the remaining records are left untouched. Under
    /// [`LookupFailurePolicy::Degrade`] the failing record is marked as not
    /// found and the run continues.
    pub async fn enrich(
        &self,
        records: &mut [MacRecord],
        on_progress: Option<&ProgressCallback>,
    ) -> AuditResult<()> {
        let total: usize = records.len();

        for (idx, record) in records.iter_mut().enumerate() {
            let company = match self.vendor_repo.get_vendor(&record.mac_address).await {
                Ok(company) => company,
                Err(e) => match self.on_failure {
                    LookupFailurePolicy::Abort => return Err(e),
                    LookupFailurePolicy::Degrade => {
                        warn!("{e}; recording as not found");
                        None
                    }
                },
            };

            record.set_company(company);
            debug!("{} -> {}", record.mac_address, record.company_or_not_found());

            if let Some(cb) = on_progress {
                cb(idx + 1, total);
            }
        }

        Ok(())
    }
}
