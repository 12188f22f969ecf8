//! Folio Core Library
//!
//! Host-independent behavior for a single-page portfolio site.
//!
//! ## Overview
//!
//! Every behavior on the page is a direct reaction to a DOM event: the
//! mobile navigation toggle, smooth in-page scrolling, active-section
//! highlighting, the navbar shadow transition, contact form validation with
//! a simulated submission, and one-shot fade-in reveals for content cards.
//!
//! The crate never touches a browser API directly. Two seams keep it
//! testable off the web:
//!
//! - [`Page`]: the document (element lookup, classes, styles, geometry)
//! - [`Executor`]: local task spawning and timers
//!
//! The `folio` crate implements both over `web-sys`. Tests enable the
//! `test-util` feature for `MemoryPage` and a paused tokio clock.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{PageConfig, PageController};
//!
//! let controller = PageController::new(page, executor, PageConfig::default())?;
//! controller.start();
//!
//! // Wire DOM events to the named handlers
//! controller.on_toggle_click();
//! controller.on_scroll();
//! ```

pub mod config;
pub mod contact;
pub mod controller;
pub mod error;
pub mod executor;
pub mod highlight;
pub mod logging;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod nav;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod throttle;
pub mod validation;

#[cfg(any(test, feature = "test-util"))]
pub mod test_support;

// Re-exports
pub use config::PageConfig;
pub use contact::{ContactForm, SubmitOutcome};
pub use controller::PageController;
pub use error::{FolioError, FolioResult};
pub use executor::Executor;
pub use highlight::{active_section, Highlighter, SectionBand};
#[cfg(any(test, feature = "test-util"))]
pub use memory::{MemoryPage, NodeId};
pub use nav::NavMenu;
pub use navbar::NavbarStyle;
pub use page::Page;
pub use reveal::{RevealObserver, RevealOptions};
pub use scroll::{scroll_destination, SmoothScroll};
pub use throttle::Throttle;
pub use validation::{FieldRule, ValidationResult, Validator, FIELDS};
