//! Page controller.
//!
//! One `PageController` is built when the document is ready. It owns every
//! element handle and every piece of state the behaviors need, and exposes
//! one named method per DOM event. The host binding forwards events to these
//! methods; nothing here reaches for globals.
//!
//! ## Startup
//!
//! ```text
//! PageController::new ── nav-toggle / nav-menu missing ──► FolioError::MissingElement
//!        │
//!        ▼
//!   start(): highlight + navbar once
//! ```

use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::config::PageConfig;
use crate::contact::{self, ContactForm, SubmitOutcome};
use crate::error::{FolioError, FolioResult};
use crate::executor::Executor;
use crate::highlight::Highlighter;
use crate::nav::NavMenu;
use crate::navbar::{apply_navbar_style, NavbarStyle};
use crate::page::Page;
use crate::reveal::{RevealObserver, RevealOptions};
use crate::scroll::SmoothScroll;
use crate::throttle::Throttle;
use crate::validation::Validator;

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAVBAR_ID: &str = "navbar";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_SUCCESS_ID: &str = "form-success";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const HERO_LINK_SELECTOR: &str = ".hero-buttons a";

/// Class added to `<body>` once the window has loaded
pub const LOADED_CLASS: &str = "loaded";

/// Owns the page state and handles every bound event.
pub struct PageController<P: Page, X> {
    page: Rc<P>,
    executor: Rc<X>,
    config: PageConfig,
    nav: NavMenu<P::Node>,
    nav_links: Vec<P::Node>,
    hero_links: Vec<P::Node>,
    navbar: Option<P::Node>,
    contact: Option<ContactForm<P::Node>>,
    validator: Validator,
    scroll: SmoothScroll,
    highlighter: Highlighter,
    reveal: RevealObserver,
    highlight_throttle: Throttle,
    navbar_throttle: Throttle,
}

impl<P, X> PageController<P, X>
where
    P: Page + 'static,
    X: Executor + 'static,
{
    /// Look up every element the page behaviors need.
    ///
    /// The toggle and menu are required; everything else is optional.
    pub fn new(page: Rc<P>, executor: Rc<X>, config: PageConfig) -> FolioResult<Rc<Self>> {
        config.validate()?;

        let toggle = page
            .element_by_id(NAV_TOGGLE_ID)
            .ok_or_else(|| FolioError::MissingElement(NAV_TOGGLE_ID.to_string()))?;
        let menu = page
            .element_by_id(NAV_MENU_ID)
            .ok_or_else(|| FolioError::MissingElement(NAV_MENU_ID.to_string()))?;

        let nav_links = page.query_all(NAV_LINK_SELECTOR);
        let hero_links = page.query_all(HERO_LINK_SELECTOR);
        let navbar = page.element_by_id(NAVBAR_ID);
        let contact = page.element_by_id(CONTACT_FORM_ID).map(|form| {
            let success = page.element_by_id(FORM_SUCCESS_ID);
            ContactForm::new(page.as_ref(), form, success, &config)
        });

        debug!(
            nav_links = nav_links.len(),
            hero_links = hero_links.len(),
            navbar = navbar.is_some(),
            contact_form = contact.is_some(),
            "Page elements resolved"
        );

        Ok(Rc::new(Self {
            nav: NavMenu::new(toggle, menu),
            nav_links,
            hero_links,
            navbar,
            contact,
            validator: Validator::new()?,
            scroll: SmoothScroll::new(config.header_offset),
            highlighter: Highlighter::new(config.section_probe_offset),
            reveal: RevealObserver::new(RevealOptions {
                threshold: config.reveal_threshold,
                bottom_margin: config.reveal_bottom_margin,
            }),
            highlight_throttle: Throttle::new(config.throttle_delay()),
            navbar_throttle: Throttle::new(config.throttle_delay()),
            page,
            executor,
            config,
        }))
    }

    pub fn page(&self) -> &Rc<P> {
        &self.page
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavMenu<P::Node> {
        &self.nav
    }

    pub fn nav_links(&self) -> &[P::Node] {
        &self.nav_links
    }

    pub fn hero_links(&self) -> &[P::Node] {
        &self.hero_links
    }

    pub fn contact(&self) -> Option<&ContactForm<P::Node>> {
        self.contact.as_ref()
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    /// Establish the initial highlight and navbar state.
    pub fn start(&self) {
        self.update_active_link();
        self.update_navbar();
        info!("Portfolio website initialized");
    }

    pub fn on_toggle_click(&self) {
        self.nav.toggle(self.page.as_ref());
    }

    /// A nav link was clicked: close the menu and smooth scroll.
    ///
    /// Returns whether default navigation must be prevented.
    pub fn on_nav_link_click(&self, link: &P::Node) -> bool {
        self.nav.close(self.page.as_ref());
        self.scroll.follow_link(self.page.as_ref(), link)
    }

    /// A hero button was clicked. Only in-page anchors are intercepted.
    pub fn on_hero_link_click(&self, link: &P::Node) -> bool {
        self.scroll.follow_link(self.page.as_ref(), link)
    }

    pub fn on_document_click(&self, target: Option<&P::Node>) {
        self.nav.on_document_click(self.page.as_ref(), target);
    }

    pub fn on_keydown(&self, key: &str) {
        self.nav.on_key(self.page.as_ref(), key);
    }

    pub fn on_nav_link_focus(&self) {
        self.nav
            .on_link_focus(self.page.as_ref(), self.config.mobile_breakpoint);
    }

    /// Scroll event: schedule the throttled highlight and navbar updates.
    pub fn on_scroll(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.highlight_throttle
            .schedule(self.executor.as_ref(), move || with_live(&weak, Self::update_active_link));
        let weak = Rc::downgrade(self);
        self.navbar_throttle
            .schedule(self.executor.as_ref(), move || with_live(&weak, Self::update_navbar));
    }

    /// Recompute the active nav link now.
    pub fn update_active_link(&self) -> Option<String> {
        self.highlighter.update(self.page.as_ref(), &self.nav_links)
    }

    /// Recompute the navbar style now.
    pub fn update_navbar(&self) -> Option<NavbarStyle> {
        let navbar = self.navbar.as_ref()?;
        Some(apply_navbar_style(
            self.page.as_ref(),
            navbar,
            self.config.navbar_threshold,
        ))
    }

    pub fn on_field_blur(&self, field: &str, value: &str) -> bool {
        contact::on_field_blur(self.page.as_ref(), &self.validator, field, value)
    }

    pub fn on_field_input(&self, field: &str, value: &str) -> bool {
        contact::on_field_input(self.page.as_ref(), &self.validator, field, value)
    }

    /// Contact form submit. Default submission is always prevented.
    pub fn on_submit(&self) -> Option<SubmitOutcome> {
        let contact = self.contact.as_ref()?;
        Some(contact.submit(&self.page, &self.executor, &self.validator))
    }

    /// Apply a batch of visibility entries to the fade-in cards.
    pub fn on_intersection(&self, entries: &[(P::Node, bool)]) -> usize {
        self.reveal.on_intersection(self.page.as_ref(), entries)
    }

    pub fn on_load(&self) {
        if let Some(body) = self.page.body() {
            self.page.add_class(&body, LOADED_CLASS);
        }
    }

    /// Handle document readiness at bind time. A window that has already
    /// loaded gets the load class now.
    ///
    /// Returns whether the caller still has to wait for `load`.
    pub fn on_ready(&self, window_loaded: bool) -> bool {
        if window_loaded {
            self.on_load();
        }
        !window_loaded
    }
}

fn with_live<T, R>(weak: &Weak<T>, f: impl FnOnce(&T) -> R) {
    if let Some(strong) = weak.upgrade() {
        f(&strong);
    }
}
