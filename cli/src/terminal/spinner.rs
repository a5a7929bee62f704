use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The spinner currently on screen, if any.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Shows a spinner with `message` until [`finish`] is called.
///
/// Returns a handle that can be moved into progress callbacks.
pub fn start(message: String, q_level: u8) -> ProgressBar {
    let pb = if q_level > 0 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
    pb
}

/// Removes the active spinner from the terminal.
pub fn finish() {
    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(pb) = active.take() {
            pb.finish_and_clear();
        }
    }
}

pub fn report_lookup_progress(pb: &ProgressBar, done: usize, total: usize) {
    pb.set_message(format!(
        "Resolved vendors for {}/{} addresses...",
        done.to_string().green().bold(),
        total
    ));
}

/// Log sink that keeps output from tearing through the spinner line.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active: Option<ProgressBar> = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) if !pb.is_hidden() => pb.suspend(|| io::stdout().write_all(buf))?,
            _ => io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
