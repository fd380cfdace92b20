//! Diagnostics routing.
//!
//! Every module emits `tracing` events. On wasm32 [`install`] registers a
//! [`ConsoleLayer`] that forwards them to the browser console; native builds
//! fall back to stderr. Nothing is installed unless the host asks for it, so
//! unit tests run silent.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Forwards tracing events to `console.{debug,log,warn,error}`.
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_event(event);
        emit(*event.metadata().level(), &line);
    }
}

/// Render `target: message key=value ...` for one event.
pub fn format_event(event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);

    let mut line = String::with_capacity(64);
    let _ = write!(line, "{}: {}", event.metadata().target(), visitor.message);
    line.push_str(&visitor.fields);
    line
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::log_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    eprintln!("[{}] {}", level, line);
}

/// Install the console layer as the global subscriber.
///
/// Returns `false` when a subscriber was already installed (e.g. `init()`
/// called twice by the host).
pub fn install(max_level: Level) -> bool {
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(max_level));
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
