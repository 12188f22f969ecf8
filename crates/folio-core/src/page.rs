//! The document seam.
//!
//! [`Page`] is the narrow slice of the DOM the behavior layer needs. The
//! browser binding implements it over `web-sys`; [`crate::MemoryPage`] is a
//! headless implementation for tests.
//!
//! Geometry follows browser conventions: `bounding_top` is relative to the
//! viewport, `scroll_y` is the document scroll offset, so the document
//! relative top of a node is `bounding_top + scroll_y`.

use std::fmt::Debug;

/// Element lookup, class/style mutation and scroll geometry.
pub trait Page {
    /// Handle to an element in the document
    type Node: Clone + PartialEq + Debug + 'static;

    /// Element with the given id, if present
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching a CSS selector
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// The `<body>` element
    fn body(&self) -> Option<Self::Node>;

    /// Attribute value, if set
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Flip a class on or off. Returns whether the class is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Set an inline style property (e.g. `box-shadow`)
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Enable or disable a form control
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Submitted value of the named control inside a form
    fn form_value(&self, form: &Self::Node, name: &str) -> Option<String>;

    /// Restore a form's controls to their initial values
    fn reset_form(&self, form: &Self::Node);

    /// Top edge of the node relative to the viewport
    fn bounding_top(&self, node: &Self::Node) -> f64;

    /// Layout height of the node
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Current vertical scroll offset of the document
    fn scroll_y(&self) -> f64;

    /// Viewport width
    fn inner_width(&self) -> f64;

    /// Request an animated scroll to a document offset
    fn smooth_scroll_to(&self, top: f64);
}
