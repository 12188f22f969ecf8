//! Structured logging for the page.
//!
//! Every `tracing` event becomes a [`LogEntry`] serialized as one JSON line
//! and handed to a [`LogSink`]. The browser binding supplies a sink that
//! writes to the developer console; tests collect lines in memory.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::PageLogLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::try_new("info")?)
//!     .with(PageLogLayer::new(ConsoleSink));
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

pub mod entry;
pub mod layer;

// Re-exports for convenience
pub use entry::LogEntry;
pub use layer::{LogSink, PageLogLayer};
#[cfg(any(test, feature = "test-util"))]
pub use layer::MemorySink;
