//! # Switch Session Ports
//!
//! Contracts for reaching a switch's command line. The pipeline only depends
//! on these traits; the SSH implementation lives in `macsweep-core`.

use async_trait::async_trait;

use crate::error::AuditResult;
use crate::network::target::{Credentials, SwitchTarget};

/// Opens authenticated sessions to switches.
#[async_trait]
pub trait SessionConnector: Send + Sync {
    /// Establishes and authenticates a session to `target`.
    ///
    /// # Errors
    /// * [`crate::error::AuditError::Connection`] when the switch is unreachable
    ///   or rejects the credentials.
    async fn connect(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
    ) -> AuditResult<Box<dyn SwitchSession>>;
}

/// An open command session to a single switch.
///
/// Sessions are one-shot: [`SwitchSession::disconnect`] consumes the session,
/// so it cannot be used again once released.
#[async_trait]
pub trait SwitchSession: Send {
    /// Runs `command` and returns everything the switch printed.
    async fn send_command(&mut self, command: &str) -> AuditResult<String>;

    /// Closes the session.
    async fn disconnect(self: Box<Self>) -> AuditResult<()>;
}
