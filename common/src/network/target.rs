//! # Switch Target Model
//!
//! Describes *which* switch to audit and *how* to talk to it: its address,
//! SSH port, command dialect and the operator's credentials.

use std::fmt;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Command-line dialect spoken by the switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Cisco IOS / IOS-XE.
    #[default]
    CiscoIos,
}

impl Dialect {
    /// The command that prints the MAC address forwarding table.
    pub fn mac_table_command(&self) -> &'static str {
        match self {
            Dialect::CiscoIos => "show mac address-table",
        }
    }
}

/// A single switch reachable over SSH.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchTarget {
    /// Hostname or IP address exactly as the operator entered it.
    pub address: String,
    pub port: u16,
    pub dialect: Dialect,
}

impl SwitchTarget {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into().trim().to_string(),
            port: DEFAULT_SSH_PORT,
            dialect: Dialect::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl fmt::Display for SwitchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == DEFAULT_SSH_PORT {
            write!(f, "{}", self.address)
        } else {
            write!(f, "{}:{}", self.address, self.port)
        }
    }
}

/// Login credentials for a switch.
///
/// The password is only reachable through [`Credentials::password`] and is
/// redacted from the `Debug` output so it never ends up in a log line.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
