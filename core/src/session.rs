//! # SSH Session Adapter
//!
//! Implements the [`SessionConnector`] and [`SwitchSession`] ports on top of
//! `russh`. Each session opens a single `exec` channel per command and
//! collects everything the switch writes to it until the channel closes.
//!
//! Login tries the `password` method first and falls back to
//! `keyboard-interactive`, answering every prompt with the password.
//! AAA-backed IOS switches often offer only the latter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use macsweep_common::config::DEFAULT_CONNECT_TIMEOUT;
use macsweep_common::error::{AuditError, AuditResult};
use macsweep_common::network::target::{Credentials, SwitchTarget};
use macsweep_common::session::{SessionConnector, SwitchSession};
use russh::client::{self, Handle, KeyboardInteractiveAuthResponse, Prompt};
use russh::{ChannelMsg, Disconnect};
use russh_keys::key::PublicKey;
use tokio::time::timeout;
use tracing::{debug, info};

/// Upper bound on `keyboard-interactive` info requests answered in one login.
const MAX_INTERACTIVE_ROUNDS: usize = 8;

/// Client-side callbacks for `russh`.
///
/// Switch host keys are accepted without verification; the operator targets
/// the switch by address and no known-hosts store is kept between runs.
struct SwitchHandler;

#[async_trait]
impl client::Handler for SwitchHandler {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        _server_public_key: &PublicKey,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Opens password-authenticated SSH sessions.
pub struct SshConnector {
    connect_timeout: Duration,
}

impl SshConnector {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for SshConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}

#[async_trait]
impl SessionConnector for SshConnector {
    async fn connect(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
    ) -> AuditResult<Box<dyn SwitchSession>> {
        let address: &str = target.address.as_str();
        let config = Arc::new(client::Config {
            inactivity_timeout: Some(self.connect_timeout * 6),
            ..Default::default()
        });

        debug!("Opening SSH connection to {}:{}", address, target.port);
        let mut handle: Handle<SwitchHandler> = match timeout(
            self.connect_timeout,
            client::connect(config, (address, target.port), SwitchHandler),
        )
        .await
        {
            Ok(Ok(handle)) => handle,
            Ok(Err(e)) => return Err(AuditError::connection(address, e)),
            Err(_elapsed) => {
                return Err(AuditError::connection(
                    address,
                    format!("no answer within {}s", self.connect_timeout.as_secs()),
                ));
            }
        };

        let authenticated: bool = authenticate(&mut handle, credentials)
            .await
            .map_err(|e| AuditError::connection(address, e))?;

        if !authenticated {
            return Err(AuditError::connection(
                address,
                format!("authentication rejected for user '{}'", credentials.username),
            ));
        }

        info!("Authenticated to {} as {}", target, credentials.username);

        Ok(Box::new(SshSession {
            handle,
            address: target.address.clone(),
        }))
    }
}

async fn authenticate(
    handle: &mut Handle<SwitchHandler>,
    credentials: &Credentials,
) -> Result<bool, russh::Error> {
    let username: &str = credentials.username.as_str();
    if handle
        .authenticate_password(username, credentials.password())
        .await?
    {
        return Ok(true);
    }

    debug!("Password login refused, trying keyboard-interactive");
    let mut reply = handle
        .authenticate_keyboard_interactive_start(username, None::<String>)
        .await?;

    for _ in 0..MAX_INTERACTIVE_ROUNDS {
        match reply {
            KeyboardInteractiveAuthResponse::Success => return Ok(true),
            KeyboardInteractiveAuthResponse::Failure => return Ok(false),
            KeyboardInteractiveAuthResponse::InfoRequest { prompts, .. } => {
                let answers: Vec<String> = answer_prompts(&prompts, credentials.password());
                reply = handle
                    .authenticate_keyboard_interactive_respond(answers)
                    .await?;
            }
        }
    }

    Ok(false)
}

/// One password per prompt; an empty info request gets an empty answer.
fn answer_prompts(prompts: &[Prompt], password: &str) -> Vec<String> {
    prompts.iter().map(|_| password.to_string()).collect()
}

/// An authenticated SSH connection to one switch.
pub struct SshSession {
    handle: Handle<SwitchHandler>,
    address: String,
}

#[async_trait]
impl SwitchSession for SshSession {
    async fn send_command(&mut self, command: &str) -> AuditResult<String> {
        let mut channel = self
            .handle
            .channel_open_session()
            .await
            .map_err(|e| AuditError::transport(command, e))?;

        channel
            .exec(true, command)
            .await
            .map_err(|e| AuditError::transport(command, e))?;

        let mut output: Vec<u8> = Vec::new();
        while let Some(msg) = channel.wait().await {
            match msg {
                ChannelMsg::Data { ref data } => output.extend_from_slice(data),
                ChannelMsg::ExtendedData { ref data, .. } => output.extend_from_slice(data),
                ChannelMsg::ExitStatus { exit_status } if exit_status != 0 => {
                    debug!("'{command}' exited with status {exit_status}");
                }
                ChannelMsg::Close => break,
                _ => {}
            }
        }

        debug!("Read {} bytes from {}", output.len(), self.address);
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    async fn disconnect(self: Box<Self>) -> AuditResult<()> {
        self.handle
            .disconnect(Disconnect::ByApplication, "", "English")
            .await
            .map_err(|e| AuditError::connection(&self.address, e))?;
        debug!("Disconnected from {}", self.address);
        Ok(())
    }
}
