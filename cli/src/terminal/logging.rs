use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;
use crate::terminal::spinner::SpinnerWriter;

/// Dependencies that are far too chatty below `warn`.
const QUIET_DEPENDENCIES: &str = "russh=warn,russh_keys=warn,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

pub struct MacsweepFormatter;

impl<S, N> FormatEvent<S, N> for MacsweepFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Pre-rendered terminal output, no status symbol.
        if meta.target() == PRINT_TARGET {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Builds the filter directives.
///
/// `rust_log` takes precedence; otherwise `-v` selects `debug` and the default is `info`.
/// Terminal output on [`PRINT_TARGET`] is always enabled.
fn filter_directives(rust_log: Option<String>, verbose: bool) -> String {
    let base: String = match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => {
            let level: &str = if verbose { "debug" } else { "info" };
            format!("{level},{QUIET_DEPENDENCIES}")
        }
    };
    format!("{base},{PRINT_TARGET}=info")
}

/// Installs the global subscriber, honouring `RUST_LOG`.
pub fn init_logging(verbose: bool) {
    let directives: String = filter_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), verbose);
    let filter: EnvFilter = EnvFilter::new(directives);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(MacsweepFormatter)
        .with_writer(|| SpinnerWriter)
        .init();
}
