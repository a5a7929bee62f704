use std::path::PathBuf;
use std::time::Duration;

use crate::network::target::DEFAULT_SSH_PORT;

pub const DEFAULT_LOOKUP_URL: &str = "https://macvendors.co/api";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// What the enricher does when a single vendor lookup fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupFailurePolicy {
    /// Stop the whole run on the first failed lookup.
    #[default]
    Abort,
    /// Record the entry as not found, warn, and carry on.
    Degrade,
}

pub struct Config {
    pub no_banner: bool,
    pub quiet: u8,
    pub verbose: bool,
    /// SSH port on the switch.
    pub port: u16,
    /// Upper bound for the SSH handshake and authentication.
    pub connect_timeout: Duration,
    /// Per-request timeout of the vendor lookup client.
    pub lookup_timeout: Duration,
    /// Base URL the MAC address is appended to.
    pub lookup_url: String,
    /// Directory the CSV report is written into.
    pub output_dir: PathBuf,
    pub lookup_failure: LookupFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            verbose: false,
            port: DEFAULT_SSH_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            output_dir: PathBuf::from("."),
            lookup_failure: LookupFailurePolicy::default(),
        }
    }
}
