//! Error types for the audit pipeline.
//!
//! Every stage reports failures through [`AuditError`]. All of them are fatal
//! to the run except [`AuditError::Lookup`], which the enricher may downgrade
//! depending on the configured [`crate::config::LookupFailurePolicy`].

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The switch could not be reached, or it rejected the handshake or credentials.
    #[error("failed to connect to {address}: {message}")]
    Connection { address: String, message: String },

    /// The session was established but running the command failed.
    #[error("command '{command}' failed: {message}")]
    Transport { command: String, message: String },

    /// Network, status or body failure while resolving a vendor.
    #[error("vendor lookup for {mac} failed: {message}")]
    Lookup { mac: String, message: String },

    /// The report could not be written.
    #[error("failed to write {path}: {message}")]
    Export { path: String, message: String },

    /// Reading operator input from the terminal failed or was cancelled.
    #[error("input error: {0}")]
    Input(String),
}

impl AuditError {
    pub fn connection(address: &str, message: impl ToString) -> Self {
        Self::Connection {
            address: address.to_string(),
            message: message.to_string(),
        }
    }

    pub fn transport(command: &str, message: impl ToString) -> Self {
        Self::Transport {
            command: command.to_string(),
            message: message.to_string(),
        }
    }

    pub fn lookup(mac: &str, message: impl ToString) -> Self {
        Self::Lookup {
            mac: mac.to_string(),
            message: message.to_string(),
        }
    }

    pub fn export(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Export {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}
