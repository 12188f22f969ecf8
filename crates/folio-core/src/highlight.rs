//! Active section highlighting.
//!
//! Each `section[id]` owns the vertical band `[top - lead, top - lead +
//! height)`, with `top` measured from the start of the document. The scroll
//! position plus the same lead is probed against every band in document
//! order; the last band containing the probe wins. When no band matches
//! the current link state is left alone.

use tracing::trace;

use crate::nav::ACTIVE_CLASS;
use crate::page::Page;

/// Selector for sections that can be highlighted
pub const SECTION_SELECTOR: &str = "section[id]";

/// Vertical band owned by one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub start: f64,
    pub end: f64,
}

impl SectionBand {
    /// Band for a section at document offset `top` with the given height.
    pub fn new(id: impl Into<String>, top: f64, height: f64, lead: f64) -> Self {
        let start = top - lead;
        Self {
            id: id.into(),
            start,
            end: start + height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position < self.end
    }
}

/// Id of the section whose band contains `scroll_y + lead`.
pub fn active_section(bands: &[SectionBand], scroll_y: f64, lead: f64) -> Option<&str> {
    let probe = scroll_y + lead;
    bands
        .iter()
        .rev()
        .find(|band| band.contains(probe))
        .map(|band| band.id.as_str())
}

/// Recomputes which nav link is active.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    lead: f64,
}

impl Highlighter {
    pub fn new(lead: f64) -> Self {
        Self { lead }
    }

    /// Measure every `section[id]` on the page.
    pub fn bands<P: Page>(&self, page: &P) -> Vec<SectionBand> {
        let scroll_y = page.scroll_y();
        page.query_all(SECTION_SELECTOR)
            .into_iter()
            .filter_map(|section| {
                let id = page.attribute(&section, "id")?;
                let top = page.bounding_top(&section) + scroll_y;
                Some(SectionBand::new(id, top, page.offset_height(&section), self.lead))
            })
            .collect()
    }

    /// Mark the link for the current section active and all others inactive.
    ///
    /// Returns the id of the active section, if any band matched.
    pub fn update<P: Page>(&self, page: &P, links: &[P::Node]) -> Option<String> {
        let bands = self.bands(page);
        let active = active_section(&bands, page.scroll_y(), self.lead)?.to_string();
        let href = format!("#{active}");
        for link in links {
            page.remove_class(link, ACTIVE_CLASS);
        }
        if let Some(link) = links
            .iter()
            .find(|link| page.attribute(link, "href").as_deref() == Some(href.as_str()))
        {
            page.add_class(link, ACTIVE_CLASS);
        }
        trace!(section = %active, "Active section updated");
        Some(active)
    }
}
