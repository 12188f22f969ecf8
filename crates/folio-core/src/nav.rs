//! Mobile navigation menu.
//!
//! Open/closed is the presence of the `active` class on the toggle button
//! and the menu container. Toggling flips each element on its own, so a
//! menu opened by keyboard focus (menu only) closes on the next toggle.

use tracing::debug;

use crate::page::Page;

/// Class marking an open menu and the active nav link
pub const ACTIVE_CLASS: &str = "active";

/// The toggle button and menu container pair.
#[derive(Debug, Clone)]
pub struct NavMenu<N> {
    toggle: N,
    menu: N,
}

impl<N: Clone + PartialEq + std::fmt::Debug> NavMenu<N> {
    pub fn new(toggle: N, menu: N) -> Self {
        Self { toggle, menu }
    }

    pub fn toggle_node(&self) -> &N {
        &self.toggle
    }

    pub fn menu_node(&self) -> &N {
        &self.menu
    }

    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.has_class(&self.menu, ACTIVE_CLASS)
    }

    /// Flip the open marker on both elements.
    pub fn toggle<P: Page<Node = N>>(&self, page: &P) {
        let menu_open = page.toggle_class(&self.menu, ACTIVE_CLASS);
        page.toggle_class(&self.toggle, ACTIVE_CLASS);
        debug!(open = menu_open, "Nav menu toggled");
    }

    /// Force the menu closed. Idempotent.
    pub fn close<P: Page<Node = N>>(&self, page: &P) {
        page.remove_class(&self.menu, ACTIVE_CLASS);
        page.remove_class(&self.toggle, ACTIVE_CLASS);
    }

    /// Close when a click lands outside both the toggle and the menu.
    pub fn on_document_click<P: Page<Node = N>>(&self, page: &P, target: Option<&N>) {
        let inside = target.is_some_and(|target| {
            page.contains(&self.toggle, target) || page.contains(&self.menu, target)
        });
        if !inside {
            self.close(page);
        }
    }

    /// Close on `Escape`.
    pub fn on_key<P: Page<Node = N>>(&self, page: &P, key: &str) {
        if key == "Escape" {
            self.close(page);
        }
    }

    /// Reveal the menu for a focused link on narrow viewports.
    pub fn on_link_focus<P: Page<Node = N>>(&self, page: &P, breakpoint: f64) {
        if page.inner_width() <= breakpoint {
            page.add_class(&self.menu, ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPage, NodeId};

    fn fixture() -> (MemoryPage, NavMenu<NodeId>, NodeId) {
        let page = MemoryPage::new();
        let nav = page.append(page.body_node(), "nav");
        let toggle = page.append(nav, "button");
        let icon = page.append(toggle, "span");
        let menu = page.append(nav, "ul");
        (page, NavMenu::new(toggle, menu), icon)
    }

    #[test]
    fn toggle_opens_and_closes_both() {
        let (page, nav, _) = fixture();
        nav.toggle(&page);
        assert!(nav.is_open(&page));
        assert!(page.has_class(nav.toggle_node(), ACTIVE_CLASS));

        nav.toggle(&page);
        assert!(!nav.is_open(&page));
        assert!(!page.has_class(nav.toggle_node(), ACTIVE_CLASS));
    }

    #[test]
    fn close_is_idempotent() {
        let (page, nav, _) = fixture();
        nav.close(&page);
        nav.close(&page);
        assert!(!nav.is_open(&page));
    }

    #[test]
    fn click_inside_toggle_keeps_menu_open() {
        let (page, nav, icon) = fixture();
        nav.toggle(&page);
        nav.on_document_click(&page, Some(&icon));
        assert!(nav.is_open(&page));
    }

    #[test]
    fn click_outside_closes() {
        let (page, nav, _) = fixture();
        let elsewhere = page.append(page.body_node(), "main");
        nav.toggle(&page);
        nav.on_document_click(&page, Some(&elsewhere));
        assert!(!nav.is_open(&page));
        assert!(!page.has_class(nav.toggle_node(), ACTIVE_CLASS));
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let (page, nav, _) = fixture();
        nav.toggle(&page);
        nav.on_key(&page, "Enter");
        assert!(nav.is_open(&page));
        nav.on_key(&page, "Escape");
        assert!(!nav.is_open(&page));
    }

    #[test]
    fn focus_opens_menu_only_on_narrow_viewport() {
        let (page, nav, _) = fixture();
        page.set_inner_width(1024.0);
        nav.on_link_focus(&page, 768.0);
        assert!(!nav.is_open(&page));

        page.set_inner_width(768.0);
        nav.on_link_focus(&page, 768.0);
        assert!(nav.is_open(&page));
        assert!(!page.has_class(nav.toggle_node(), ACTIVE_CLASS));
    }
}
