//! # Vendor Lookup Adapter
//!
//! Implements [`VendorRepository`] against the macvendors.co HTTP API:
//! `GET <base>/<mac>` answering `{ "result": { "company": "..." } }`.
//! Unknown prefixes come back as a `result` without a `company` member.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use macsweep_common::error::{AuditError, AuditResult};
use macsweep_common::vendors::VendorRepository;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    result: LookupResult,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    #[serde(default)]
    company: Option<String>,
}

/// Extracts the company name from a lookup response body.
///
/// The name is returned as sent; `Ok(None)` means the service answered
/// without a `company` (missing or `null`). A body that is not the expected
/// JSON shape is an error.
pub fn parse_lookup_body(mac_address: &str, body: &str) -> AuditResult<Option<String>> {
    let response: LookupResponse = serde_json::from_str(body)
        .map_err(|e| AuditError::lookup(mac_address, format!("malformed response: {e}")))?;

    Ok(response.result.company)
}

/// Names the cause of a failed request; reqwest's top-level message only says
/// which URL was involved.
fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        return "timed out".to_string();
    }
    match e.source() {
        Some(cause) => format!("{e}: {cause}"),
        None => e.to_string(),
    }
}

/// HTTP client for the macvendors.co API.
pub struct MacVendorsApi {
    client: Client,
    base_url: String,
}

impl MacVendorsApi {
    pub fn new(base_url: &str, request_timeout: Duration) -> AuditResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("macsweep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuditError::lookup("-", format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn lookup_url(&self, mac_address: &str) -> String {
        format!("{}/{}", self.base_url, mac_address)
    }
}

#[async_trait]
impl VendorRepository for MacVendorsApi {
    async fn get_vendor(&self, mac_address: &str) -> AuditResult<Option<String>> {
        let url: String = self.lookup_url(mac_address);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AuditError::lookup(mac_address, describe_request_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::lookup(mac_address, format!("HTTP {status}")));
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| AuditError::lookup(mac_address, describe_request_error(&e)))?;

        parse_lookup_body(mac_address, &body)
    }
}
