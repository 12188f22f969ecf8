//! Folio - browser entry point for the portfolio page behaviors.
//!
//! The behaviors themselves live in `folio-core` against the [`Page`]
//! abstraction. This crate supplies the real document, timers and console,
//! and binds DOM events to the controller once the document is parsed.
//!
//! [`Page`]: folio_core::Page

mod dom;
mod events;
mod executor;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{config, FolioError, FolioResult, PageConfig, PageController};
use gloo::events::EventListener;
use tracing::info;
use wasm_bindgen::prelude::*;

pub use dom::BrowserPage;
pub use executor::BrowserExecutor;

use events::Bindings;

/// The controller as wired into a live document.
pub type Controller = PageController<BrowserPage, BrowserExecutor>;

thread_local! {
    static BINDINGS: RefCell<Option<(Rc<Controller>, Bindings)>> = const { RefCell::new(None) };
}

/// Module start hook. Boots now, or once `DOMContentLoaded` fires.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let page = BrowserPage::new().map_err(to_js)?;
    if page.is_parsing() {
        EventListener::once(page.document(), "DOMContentLoaded", |_| {
            if let Err(err) = boot() {
                gloo::console::error!(format!("folio failed to start: {err}"));
            }
        })
        .forget();
        Ok(())
    } else {
        boot().map_err(to_js)
    }
}

fn boot() -> FolioResult<()> {
    let page = BrowserPage::new()?;

    // Logging comes up before the config is judged, so a bad config can
    // still be reported.
    let loaded = config::load_from_page(&page);
    let filter = loaded
        .as_ref()
        .map(|config| config.log_filter.clone())
        .unwrap_or_else(|_| PageConfig::default().log_filter);
    if let Err(err) = logging::init(&filter) {
        gloo::console::warn!(format!("folio logging unavailable: {err}"));
    }
    let config = config::or_default(loaded);

    let controller = PageController::new(Rc::new(page), Rc::new(BrowserExecutor), config)?;
    let bindings = events::bind(&controller);
    controller.start();
    info!(listeners = bindings.listener_count(), "Page behaviors attached");

    BINDINGS.with(|slot| {
        *slot.borrow_mut() = Some((controller, bindings));
    });
    Ok(())
}

fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
