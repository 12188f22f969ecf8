//! One-shot fade-in for content cards.
//!
//! Cards are handed to the host's visibility observer once at startup and
//! never unobserved. The first intersecting entry adds `fade-in`; later
//! entries re-add a class that is already there.

use crate::page::Page;

/// Elements that fade in when scrolled into view
pub const REVEAL_SELECTOR: &str = ".card, .project-card, .achievement-item, .about-card";

/// Class added to a revealed element
pub const REVEALED_CLASS: &str = "fade-in";

/// Visibility observer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction that counts as intersecting
    pub threshold: f64,
    /// Bottom root margin in pixels
    pub bottom_margin: i32,
}

impl RevealOptions {
    /// CSS margin string for the observer root (`top right bottom left`)
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50,
        }
    }
}

/// Collects cards to observe and applies intersection results.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealObserver {
    options: RevealOptions,
}

impl RevealObserver {
    pub fn new(options: RevealOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn targets<P: Page>(&self, page: &P) -> Vec<P::Node> {
        page.query_all(REVEAL_SELECTOR)
    }

    /// Apply a batch of `(element, is_intersecting)` entries.
    ///
    /// Returns how many entries were intersecting.
    pub fn on_intersection<P: Page>(&self, page: &P, entries: &[(P::Node, bool)]) -> usize {
        let mut revealed = 0;
        for (node, intersecting) in entries {
            if *intersecting {
                page.add_class(node, REVEALED_CLASS);
                revealed += 1;
            }
        }
        revealed
    }
}
