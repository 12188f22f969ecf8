//! Navbar elevation on scroll.
//!
//! The background fill is written identically in both states; only the
//! shadow differs.

use crate::page::Page;

/// Surface fill applied to the navbar in every state
pub const NAVBAR_BACKGROUND: &str = "rgba(var(--color-surface-rgb, 255, 255, 253), 0.95)";

/// Navbar appearance keyed on scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At or below the threshold: no shadow
    Resting,
    /// Scrolled past the threshold: elevated shadow
    Elevated,
}

impl NavbarStyle {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Elevated
        } else {
            NavbarStyle::Resting
        }
    }

    pub fn background(self) -> &'static str {
        NAVBAR_BACKGROUND
    }

    pub fn shadow(self) -> &'static str {
        match self {
            NavbarStyle::Resting => "none",
            NavbarStyle::Elevated => "var(--shadow-md)",
        }
    }
}

/// Write the style for the current scroll offset onto the navbar.
pub fn apply_navbar_style<P: Page>(page: &P, navbar: &P::Node, threshold: f64) -> NavbarStyle {
    let style = NavbarStyle::for_offset(page.scroll_y(), threshold);
    page.set_style(navbar, "background", style.background());
    page.set_style(navbar, "box-shadow", style.shadow());
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPage;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(NavbarStyle::for_offset(0.0, 50.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::for_offset(50.0, 50.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::for_offset(50.5, 50.0), NavbarStyle::Elevated);
    }

    #[test]
    fn background_is_the_same_in_both_states() {
        assert_eq!(
            NavbarStyle::Resting.background(),
            NavbarStyle::Elevated.background()
        );
        assert_ne!(NavbarStyle::Resting.shadow(), NavbarStyle::Elevated.shadow());
    }

    #[test]
    fn apply_writes_inline_styles() {
        let page = MemoryPage::new();
        let navbar = page.append(page.body_node(), "nav");

        page.set_scroll_y(200.0);
        assert_eq!(apply_navbar_style(&page, &navbar, 50.0), NavbarStyle::Elevated);
        assert_eq!(page.style(navbar, "box-shadow").as_deref(), Some("var(--shadow-md)"));
        assert_eq!(page.style(navbar, "background").as_deref(), Some(NAVBAR_BACKGROUND));

        page.set_scroll_y(10.0);
        apply_navbar_style(&page, &navbar, 50.0);
        assert_eq!(page.style(navbar, "box-shadow").as_deref(), Some("none"));
        assert_eq!(page.style(navbar, "background").as_deref(), Some(NAVBAR_BACKGROUND));
    }
}
