//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::rc::Rc;

use folio_core::{MemoryPage, NodeId, Page, PageConfig, PageController};

pub use folio_core::test_support::{settle, TokioExecutor};

pub const SECTIONS: [&str; 4] = ["home", "about", "projects", "contact"];
pub const SECTION_HEIGHT: f64 = 800.0;

/// Handles into the portfolio fixture.
pub struct Portfolio {
    pub page: Rc<MemoryPage>,
    pub toggle: NodeId,
    pub menu: NodeId,
    pub navbar: NodeId,
    pub nav_links: Vec<NodeId>,
    pub sections: Vec<NodeId>,
    pub hero_links: Vec<NodeId>,
    pub cards: Vec<NodeId>,
    pub form: NodeId,
    pub inputs: Vec<NodeId>,
    pub button: NodeId,
    pub success: NodeId,
}

/// Build the stock portfolio document: navbar, four stacked sections,
/// hero buttons, cards and the contact form.
pub fn portfolio() -> Portfolio {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_node();

    let navbar = page.append(body, "nav");
    page.set_id(navbar, "navbar");
    let toggle = page.append(navbar, "button");
    page.set_id(toggle, "nav-toggle");
    let menu = page.append(navbar, "ul");
    page.set_id(menu, "nav-menu");

    let mut nav_links = Vec::new();
    for id in SECTIONS {
        let item = page.append(menu, "li");
        let link = page.append(item, "a");
        page.set_attribute(link, "class", "nav-link");
        page.set_attribute(link, "href", &format!("#{id}"));
        nav_links.push(link);
    }

    let mut sections = Vec::new();
    for (i, id) in SECTIONS.into_iter().enumerate() {
        let section = page.append(body, "section");
        page.set_id(section, id);
        page.set_layout(section, i as f64 * SECTION_HEIGHT, SECTION_HEIGHT);
        sections.push(section);
    }

    let hero = page.append(sections[0], "div");
    page.set_attribute(hero, "class", "hero-buttons");
    let mut hero_links = Vec::new();
    for href in ["#projects", "resume.pdf"] {
        let link = page.append(hero, "a");
        page.set_attribute(link, "href", href);
        hero_links.push(link);
    }

    let mut cards = Vec::new();
    for class in ["about-card", "project-card", "project-card", "achievement-item"] {
        let parent = if class == "about-card" { sections[1] } else { sections[2] };
        let card = page.append(parent, "div");
        page.set_attribute(card, "class", &format!("{class} card"));
        cards.push(card);
    }

    let form = page.append(sections[3], "form");
    page.set_id(form, "contact-form");
    let mut inputs = Vec::new();
    for field in folio_core::FIELDS {
        let input = page.append(form, if field == "message" { "textarea" } else { "input" });
        page.set_id(input, field);
        page.set_attribute(input, "name", field);
        let error = page.append(form, "div");
        page.set_id(error, &format!("{field}-error"));
        inputs.push(input);
    }
    let button = page.append(form, "button");
    page.set_attribute(button, "type", "submit");
    page.set_text(&button, "Send Message");
    let success = page.append(sections[3], "div");
    page.set_id(success, "form-success");
    page.set_attribute(success, "class", "form-success hidden");

    Portfolio {
        page,
        toggle,
        menu,
        navbar,
        nav_links,
        sections,
        hero_links,
        cards,
        form,
        inputs,
        button,
        success,
    }
}

pub type Controller = PageController<MemoryPage, TokioExecutor>;

pub fn controller(fixture: &Portfolio) -> Rc<Controller> {
    PageController::new(
        Rc::clone(&fixture.page),
        Rc::new(TokioExecutor),
        PageConfig::default(),
    )
    .expect("fixture has toggle and menu")
}

/// Links currently marked active
pub fn active_links(fixture: &Portfolio) -> Vec<NodeId> {
    fixture
        .nav_links
        .iter()
        .copied()
        .filter(|link| fixture.page.has_class(link, "active"))
        .collect()
}
