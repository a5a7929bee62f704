//! Retrieves the raw MAC address table over a one-shot switch session.

use macsweep_common::error::AuditResult;
use macsweep_common::network::target::Dialect;
use macsweep_common::session::SwitchSession;
use tracing::{debug, warn};

/// Runs the dialect's MAC table command and releases the session.
///
/// The session is consumed: it is disconnected whether or not the command
/// succeeded. A failed disconnect after a successful command only warns,
/// since the table has already been read.
pub async fn fetch_mac_table(
    mut session: Box<dyn SwitchSession>,
    dialect: Dialect,
) -> AuditResult<Vec<String>> {
    let command: &str = dialect.mac_table_command();
    debug!("Sending '{command}'");

    let output = session.send_command(command).await;

    if let Err(e) = session.disconnect().await {
        warn!("Failed to close switch session cleanly: {e}");
    }

    let lines: Vec<String> = output?.lines().map(str::to_string).collect();
    debug!("Received {} lines of output", lines.len());

    Ok(lines)
}
