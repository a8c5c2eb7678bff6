//! Log line formatting with the navigation turn number.
//!
//! A line looks like `12:04:31.52210 0x0003  WARN dungeon::game: Rejected move sequence error=... input=ez`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Turns started since the process began.
static TURN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits are shown.
const TURN_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// How a piece of the line is drawn when the writer supports ANSI escapes.
#[derive(Debug, Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Level(Level),
}

impl Style {
    fn escape(self) -> &'static str {
        match self {
            Style::Dim => "\x1b[2m",
            Style::Bold => "\x1b[1m",
            Style::Level(level) => match level {
                Level::TRACE => "\x1b[35m",
                Level::DEBUG => "\x1b[34m",
                Level::INFO => "\x1b[32m",
                Level::WARN => "\x1b[33m",
                Level::ERROR => "\x1b[31m",
            },
        }
    }
}

fn paint(writer: &mut Writer<'_>, style: Style, value: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{}{value}\x1b[0m", style.escape())
    } else {
        write!(writer, "{value}")
    }
}

/// Event formatter that prefixes every line with a timestamp and the current turn.
pub struct TurnFormatter;

impl<S, N> FormatEvent<S, N> for TurnFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        paint(&mut writer, Style::Dim, timestamp)?;
        paint(&mut writer, Style::Dim, format_args!(" 0x{:04X} ", turn_count() & TURN_DISPLAY_MASK))?;
        paint(&mut writer, Style::Level(*meta.level()), level_label(meta.level()))?;
        writer.write_char(' ')?;

        for span in ctx.event_scope().into_iter().flat_map(|scope| scope.from_root()) {
            paint(&mut writer, Style::Bold, span.name())?;
            let extensions = span.extensions();
            if let Some(fields) = extensions.get::<FormattedFields<N>>().filter(|fields| !fields.is_empty()) {
                paint(&mut writer, Style::Bold, format_args!("{{{fields}}}"))?;
            }
            writer.write_str(": ")?;
        }

        paint(&mut writer, Style::Dim, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Level name right-aligned to five characters.
pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => " INFO",
        Level::WARN => " WARN",
        Level::ERROR => "ERROR",
    }
}

/// Marks the start of a navigation turn.
pub fn increment_turn() {
    TURN_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn turn_count() -> u64 {
    TURN_COUNTER.load(Ordering::Relaxed)
}
