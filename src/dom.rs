//! [`Page`] over the live browser document.

use folio_core::{FolioError, FolioResult, Page};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

/// The window and document the page runs in.
#[derive(Debug, Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> FolioResult<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the document is still being parsed
    pub fn is_parsing(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Whether the window `load` event has already fired
    pub fn is_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of an input or textarea
pub fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

impl Page for BrowserPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                warn!(selector, error = ?err, "Selector rejected");
                Vec::new()
            }
        }
    }

    fn query_in(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = node.set_attribute("disabled", "");
        } else {
            let _ = node.remove_attribute("disabled");
        }
    }

    fn form_value(&self, form: &Element, name: &str) -> Option<String> {
        let form = form.dyn_ref::<HtmlFormElement>()?;
        let data = FormData::new_with_form(form).ok()?;
        data.get(name).as_string()
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn bounding_top(&self, node: &Element) -> f64 {
        node.get_bounding_client_rect().top()
    }

    fn offset_height(&self, node: &Element) -> f64 {
        match node.dyn_ref::<HtmlElement>() {
            Some(element) => f64::from(element.offset_height()),
            None => f64::from(node.client_height()),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
