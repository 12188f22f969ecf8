//! Smooth in-page scrolling.

use tracing::debug;

use crate::page::Page;

/// Document offset to scroll to so `rect_top` lands below the fixed header.
pub fn scroll_destination(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}

/// Element id named by an in-page anchor (`#about` -> `about`).
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth scroll for same-page anchors.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    header_offset: f64,
}

impl SmoothScroll {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Scroll to the target of `href` if it resolves on this page.
    ///
    /// Returns `true` when the scroll was started and the default
    /// navigation must be prevented.
    pub fn follow<P: Page>(&self, page: &P, href: &str) -> bool {
        let Some(target) = fragment_target(href).and_then(|id| page.element_by_id(id)) else {
            debug!(href, "No in-page target, leaving default navigation");
            return false;
        };
        let top = scroll_destination(page.bounding_top(&target), page.scroll_y(), self.header_offset);
        debug!(href, top, "Smooth scrolling");
        page.smooth_scroll_to(top);
        true
    }

    /// Follow the `href` attribute of an anchor element.
    pub fn follow_link<P: Page>(&self, page: &P, link: &P::Node) -> bool {
        match page.attribute(link, "href") {
            Some(href) => self.follow(page, &href),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPage;

    #[test]
    fn destination_subtracts_header() {
        assert_eq!(scroll_destination(300.0, 200.0, 80.0), 420.0);
        assert_eq!(scroll_destination(-150.0, 900.0, 80.0), 670.0);
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
        assert_eq!(fragment_target("resume.pdf"), None);
    }

    #[test]
    fn follow_scrolls_to_section() {
        let page = MemoryPage::new();
        let section = page.append(page.body_node(), "section");
        page.set_id(section, "projects");
        page.set_layout(section, 1200.0, 600.0);
        page.set_scroll_y(300.0);

        assert!(SmoothScroll::new(80.0).follow(&page, "#projects"));
        assert_eq!(page.scroll_requests(), vec![1120.0]);
    }

    #[test]
    fn missing_target_is_not_intercepted() {
        let page = MemoryPage::new();
        assert!(!SmoothScroll::new(80.0).follow(&page, "#nowhere"));
        assert!(!SmoothScroll::new(80.0).follow(&page, "/blog"));
        assert!(page.scroll_requests().is_empty());
    }

    #[test]
    fn follow_link_reads_href() {
        let page = MemoryPage::new();
        let section = page.append(page.body_node(), "section");
        page.set_id(section, "contact");
        page.set_layout(section, 500.0, 100.0);
        let link = page.append(page.body_node(), "a");
        page.set_attribute(link, "href", "#contact");
        let bare = page.append(page.body_node(), "a");

        let scroll = SmoothScroll::new(80.0);
        assert!(scroll.follow_link(&page, &link));
        assert!(!scroll.follow_link(&page, &bare));
        assert_eq!(page.scroll_requests(), vec![420.0]);
    }
}
