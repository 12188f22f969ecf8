//! Console logging for the browser.

use folio_core::logging::{LogSink, PageLogLayer};
use folio_core::{FolioError, FolioResult};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Writes JSON log lines to the developer console at the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: &Level, line: &str) {
        match *level {
            Level::ERROR => gloo::console::error!(line),
            Level::WARN => gloo::console::warn!(line),
            Level::INFO => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

/// Install the global subscriber with the given filter directive.
pub fn init(filter: &str) -> FolioResult<()> {
    let filter = EnvFilter::try_new(filter)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| FolioError::Logging(e.to_string()))?;
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(PageLogLayer::new(ConsoleSink));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FolioError::Logging(e.to_string()))
}
