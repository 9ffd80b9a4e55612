use std::fmt::{self, Write as _};

use anyhow::Context;
use colored::*;
use meshaddr_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Target used by [`crate::terminal::print::print`] for undecorated output lines.
pub const PRINT_TARGET: &str = "meshaddr::print";

pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let default_level = if cfg.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(with_print_target(filter)?)
        .event_format(MeshFormatter)
        .with_writer(std::io::stdout)
        .init();
    Ok(())
}

/// Command output is logged on [`PRINT_TARGET`] and must survive any `RUST_LOG` level.
fn with_print_target(filter: EnvFilter) -> anyhow::Result<EnvFilter> {
    let directive: Directive = format!("{PRINT_TARGET}=info")
        .parse::<Directive>()
        .context("building print target directive")?;
    Ok(filter.add_directive(directive))
}

pub struct MeshFormatter;

impl<S, N> FormatEvent<S, N> for MeshFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            return writeln!(writer, "{}", fields.raw_msg.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), fields.status.as_deref()) {
                (Level::INFO, Some("success")) => ("[✓]", |s| s.green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[+]", |s| s.green().bold()),
                (Level::WARN, _) => ("[*]", |s| s.yellow().bold()),
                _ => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        if !fields.rest.is_empty() {
            write!(writer, " {}", fields.rest.dimmed())?;
        }
        writeln!(writer)
    }
}

/// Splits an event into its message, the `status`/`raw_msg` markers and everything else.
#[derive(Default)]
struct EventFields {
    message: String,
    status: Option<String>,
    raw_msg: Option<String>,
    rest: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "status" => self.status = Some(value.to_string()),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.push_rest(name, &value),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            name => self.push_rest(name, &format_args!("{value:?}")),
        }
    }
}

impl EventFields {
    fn push_rest(&mut self, name: &str, value: &dyn fmt::Display) {
        if !self.rest.is_empty() {
            self.rest.push(' ');
        }
        let _ = write!(self.rest, "{name}={value}");
    }
}
