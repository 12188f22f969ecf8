//! Tracing Layer that renders events as JSON lines.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::LogEntry;

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: &Level, line: &str);
}

/// Sink that keeps every line in memory.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: std::sync::Arc<parking_lot::Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "test-util"))]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl LogSink for MemorySink {
    fn write(&self, _level: &Level, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// A tracing Layer that turns events into [`LogEntry`] lines.
pub struct PageLogLayer<S> {
    sink: S,
}

impl<S: LogSink> PageLogLayer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S, Sub> Layer<Sub> for PageLogLayer<S>
where
    S: LogSink,
    Sub: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, Sub>) {
        let metadata = event.metadata();
        let level = metadata.level();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let mut entry = LogEntry::new(level.as_str().to_lowercase(), metadata.target(), message);

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope.from_root().map(|span| span.name().to_string()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Logging must never take the page down
        if let Ok(line) = entry.to_json_line() {
            self.sink.write(level, &line);
        }
    }
}

/// Splits an event into its message and the remaining fields.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: &Field, value: impl Into<serde_json::Value>) {
        self.fields.insert(field.name().to_string(), value.into());
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut rendered = String::new();
        let _ = write!(rendered, "{value:?}");
        match field.name() {
            "message" => self.message = Some(rendered),
            _ => self.insert(field, rendered),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            _ => self.insert(field, value),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    // NaN and infinities have no JSON form
    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(number) = serde_json::Number::from_f64(value) {
            self.insert(field, number);
        }
    }
}
