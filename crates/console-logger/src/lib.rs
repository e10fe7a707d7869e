//! Console Logger
//!
//! A `tracing_subscriber` layer that forwards events to the browser's
//! `console.*` functions, one line per event:
//!
//! ```text
//! [WARN internship_finder_ui::app] recommendation request failed ticket=3
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{Layer, Registry};
use wasm_bindgen::JsValue;

/// Destination for formatted log lines
pub trait ConsoleSink: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// The page's devtools console
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::log_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

pub struct ConsoleLayer<W = BrowserConsole> {
    sink: W,
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self { sink: BrowserConsole }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ConsoleSink> ConsoleLayer<W> {
    pub fn with_sink(sink: W) -> Self {
        Self { sink }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: ConsoleSink,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = format!("[{} {}] {}{}", meta.level(), meta.target(), fields.message, fields.rest);
        self.sink.write(*meta.level(), &line);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    rest: String,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.rest, " {}={:?}", field.name(), value);
        }
    }
}

/// `"debug"`, `"warn"`, ... Unknown names fall back to INFO.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// Install the console layer as the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(level: &str) -> Result<(), TryInitError> {
    Registry::default()
        .with(ConsoleLayer::new().with_filter(parse_level(level)))
        .try_init()
}
