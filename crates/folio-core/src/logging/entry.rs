//! Log entry type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tracing event, flattened for the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 UTC timestamp, millisecond precision
    pub ts: String,

    /// Lowercase level name
    pub level: String,

    /// Event target, usually the module path
    pub target: String,

    /// The `message` field of the event
    pub msg: String,

    /// Remaining event fields as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing span names, outermost first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    /// Stamp an entry with the current time.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// One JSON object, no newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_parts_are_omitted() {
        let line = LogEntry::new("info", "folio_core", "ready").to_json_line().unwrap();
        assert!(line.contains("\"msg\":\"ready\""));
        assert!(!line.contains("fields"));
        assert!(!line.contains("span"));
    }

    #[test]
    fn parses_back() {
        let entry = LogEntry::new("warn", "folio", "slow")
            .with_fields(serde_json::json!({ "ms": 12 }))
            .with_span("startup");
        let parsed = LogEntry::from_json_line(&entry.to_json_line().unwrap()).unwrap();
        assert_eq!(parsed.level, "warn");
        assert_eq!(parsed.span.as_deref(), Some("startup"));
        assert_eq!(parsed.fields.unwrap()["ms"], 12);
    }
}
