//! Interactive operator prompts.
//!
//! The password prompt switches the terminal to raw mode so keystrokes are
//! never echoed. When stdin is not a terminal the password is read as a plain
//! line instead.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use macsweep_common::error::{AuditError, AuditResult};

/// Restores cooked mode however the prompt is left.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> AuditResult<Self> {
        enable_raw_mode().map_err(|e| AuditError::Input(format!("cannot hide password input: {e}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn show_label(label: &str) -> AuditResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}: ").and_then(|_| stdout.flush()).map_err(input_error)
}

fn input_error(e: io::Error) -> AuditError {
    AuditError::Input(e.to_string())
}

fn read_stdin_line() -> AuditResult<String> {
    let mut line = String::new();
    let read: usize = io::stdin().lock().read_line(&mut line).map_err(input_error)?;
    if read == 0 {
        return Err(AuditError::Input("stdin closed".to_string()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for a visible value, e.g. the switch address.
pub fn prompt_line(label: &str) -> AuditResult<String> {
    show_label(label)?;
    let value: String = read_stdin_line()?.trim().to_string();
    if value.is_empty() {
        return Err(AuditError::Input(format!("{label} must not be empty")));
    }
    Ok(value)
}

/// Asks for a secret without echoing it.
pub fn prompt_password(label: &str) -> AuditResult<String> {
    show_label(label)?;

    if !io::stdin().is_terminal() {
        return read_stdin_line();
    }

    let password: AuditResult<String> = {
        let _guard = RawModeGuard::enable()?;
        read_hidden()
    };
    println!();
    password
}

fn read_hidden() -> AuditResult<String> {
    let mut password = String::new();
    loop {
        let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read().map_err(input_error)? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        match code {
            KeyCode::Enter => return Ok(password),
            KeyCode::Backspace => {
                password.pop();
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(AuditError::Input("password prompt cancelled".to_string()));
            }
            KeyCode::Esc => {
                return Err(AuditError::Input("password prompt cancelled".to_string()));
            }
            KeyCode::Char(c) => password.push(c),
            _ => {}
        }
    }
}
