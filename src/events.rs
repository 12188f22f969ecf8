//! Wires DOM events to the page controller.
//!
//! Every listener forwards to one named controller method. Listeners and the
//! reveal observer live in [`Bindings`] for as long as the page does.

use std::rc::Rc;

use folio_core::{FolioError, FolioResult, Page, FIELDS};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent};

use crate::dom::control_value;
use crate::Controller;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Everything that must stay alive for the handlers to keep firing.
pub struct Bindings {
    listeners: Vec<EventListener>,
    observer: Option<IntersectionObserver>,
    _reveal_callback: Option<RevealCallback>,
}

impl Bindings {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Attach every handler the page needs.
///
/// Never fails: a missing browser feature only disables what depends on it.
pub fn bind(controller: &Rc<Controller>) -> Bindings {
    let page = controller.page();
    let window = page.window();
    let document = page.document();
    let mut listeners = Vec::new();

    let ctl = Rc::clone(controller);
    listeners.push(EventListener::new(controller.nav().toggle_node(), "click", move |_| {
        ctl.on_toggle_click();
    }));

    for link in controller.nav_links() {
        let ctl = Rc::clone(controller);
        let target = link.clone();
        listeners.push(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if ctl.on_nav_link_click(&target) {
                    event.prevent_default();
                }
            },
        ));

        let ctl = Rc::clone(controller);
        listeners.push(EventListener::new(link, "focus", move |_| {
            ctl.on_nav_link_focus();
        }));
    }

    for link in controller.hero_links() {
        let ctl = Rc::clone(controller);
        let target = link.clone();
        listeners.push(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if ctl.on_hero_link_click(&target) {
                    event.prevent_default();
                }
            },
        ));
    }

    let ctl = Rc::clone(controller);
    listeners.push(EventListener::new(document, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok());
        ctl.on_document_click(target.as_ref());
    }));

    let ctl = Rc::clone(controller);
    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            ctl.on_keydown(&event.key());
        }
    }));

    let ctl = Rc::clone(controller);
    listeners.push(EventListener::new(window, "scroll", move |_| {
        ctl.on_scroll();
    }));

    for field in FIELDS {
        let Some(input) = page.element_by_id(field) else {
            debug!(field, "No input for field");
            continue;
        };

        let ctl = Rc::clone(controller);
        let source = input.clone();
        listeners.push(EventListener::new(&input, "blur", move |_| {
            ctl.on_field_blur(field, &control_value(&source));
        }));

        let ctl = Rc::clone(controller);
        let source = input.clone();
        listeners.push(EventListener::new(&input, "input", move |_| {
            ctl.on_field_input(field, &control_value(&source));
        }));
    }

    if let Some(contact) = controller.contact() {
        let ctl = Rc::clone(controller);
        listeners.push(EventListener::new_with_options(
            contact.form_node(),
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                ctl.on_submit();
            },
        ));
    }

    if controller.on_ready(page.is_loaded()) {
        let ctl = Rc::clone(controller);
        listeners.push(EventListener::once(window, "load", move |_| {
            ctl.on_load();
        }));
    }
    debug!(listeners = listeners.len(), "Page events bound");

    // Fade-in is the only behavior that needs the observer
    let (observer, reveal_callback) = match observe_reveals(controller) {
        Ok((observer, callback)) => (Some(observer), Some(callback)),
        Err(err) => {
            warn!(error = %err, "Fade-in disabled");
            (None, None)
        }
    };

    Bindings {
        listeners,
        observer,
        _reveal_callback: reveal_callback,
    }
}

/// Register every fade-in card with an `IntersectionObserver`.
fn observe_reveals(controller: &Rc<Controller>) -> FolioResult<(IntersectionObserver, RevealCallback)> {
    let ctl = Rc::clone(controller);
    let callback: RevealCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch: Vec<(Element, bool)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| (entry.target(), entry.is_intersecting()))
            .collect();
        ctl.on_intersection(&batch);
    });

    let options = controller.reveal().options();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| FolioError::Dom(format!("IntersectionObserver: {err:?}")))?;

    let targets = controller.reveal().targets(controller.page().as_ref());
    for target in &targets {
        observer.observe(target);
    }
    debug!(targets = targets.len(), "Reveal observer registered");
    Ok((observer, callback))
}

impl Drop for Bindings {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}
