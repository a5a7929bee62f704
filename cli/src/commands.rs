pub mod audit;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use macsweep_common::config::{Config, DEFAULT_LOOKUP_URL, LookupFailurePolicy};
use macsweep_common::network::target::DEFAULT_SSH_PORT;

#[derive(Parser, Debug)]
#[command(name = "macsweep")]
#[command(version)]
#[command(about = "Map the vendors behind a switch's MAC address table.")]
pub struct CommandLine {
    /// Switch address; prompted for when omitted
    #[arg(short, long)]
    pub address: Option<String>,

    /// Login user; prompted for when omitted
    #[arg(short, long)]
    pub username: Option<String>,

    /// SSH port of the switch
    #[arg(short, long, default_value_t = DEFAULT_SSH_PORT)]
    pub port: u16,

    /// Seconds to wait for the SSH handshake and login
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub connect_timeout: u64,

    /// Seconds to wait for each vendor lookup
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub lookup_timeout: u64,

    /// Base URL of the vendor lookup API
    #[arg(long, value_name = "URL", default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// Directory to write the CSV report into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Record failed vendor lookups as NOT FOUND instead of aborting
    #[arg(long)]
    pub degrade_lookups: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less output; repeat to hide the per-port listing
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            verbose: self.verbose,
            port: self.port,
            connect_timeout: Duration::from_secs(self.connect_timeout),
            lookup_timeout: Duration::from_secs(self.lookup_timeout),
            lookup_url: self.lookup_url.clone(),
            output_dir: self.output_dir.clone(),
            lookup_failure: if self.degrade_lookups {
                LookupFailurePolicy::Degrade
            } else {
                LookupFailurePolicy::Abort
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn defaults_match_config_defaults() {
        let cli = CommandLine::try_parse_from(["macsweep"]).unwrap();
        let cfg = cli.to_config();
        let defaults = Config::default();

        assert_eq!(cli.address, None);
        assert_eq!(cfg.port, defaults.port);
        assert_eq!(cfg.connect_timeout, defaults.connect_timeout);
        assert_eq!(cfg.lookup_timeout, defaults.lookup_timeout);
        assert_eq!(cfg.lookup_url, defaults.lookup_url);
        assert_eq!(cfg.output_dir, defaults.output_dir);
        assert_eq!(cfg.lookup_failure, LookupFailurePolicy::Abort);
    }

    #[test]
    fn flags_are_carried_into_config() {
        let cli = CommandLine::try_parse_from([
            "macsweep", "-a", "10.0.0.2", "-u", "netops", "-p", "2222", "-o", "/tmp/reports",
            "--degrade-lookups", "-qq", "--lookup-timeout", "3",
        ])
        .unwrap();
        let cfg = cli.to_config();

        assert_eq!(cli.address.as_deref(), Some("10.0.0.2"));
        assert_eq!(cli.username.as_deref(), Some("netops"));
        assert_eq!(cfg.port, 2222);
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.lookup_timeout, Duration::from_secs(3));
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(cfg.lookup_failure, LookupFailurePolicy::Degrade);
    }

    #[test]
    fn there_is_no_password_flag() {
        assert!(CommandLine::try_parse_from(["macsweep", "--password", "secret"]).is_err());
    }
}
