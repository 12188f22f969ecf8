//! Headless [`Page`] implementation.
//!
//! `MemoryPage` is a tiny element tree with just enough of the DOM for the
//! behavior layer: ids, classes, attributes, inline styles, text, form values
//! and a fixed layout (document-relative top and height per element).
//!
//! The selector engine understands `tag`, `#id`, `.class`, `[attr]`,
//! `[attr="value"]`, the descendant combinator and comma-separated lists.
//! Smooth scroll requests jump immediately and are recorded.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::page::Page;

/// Handle to an element in a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    top: f64,
    height: f64,
}

#[derive(Debug)]
struct Document {
    nodes: Vec<ElementData>,
    scroll_y: f64,
    inner_width: f64,
    scroll_requests: Vec<f64>,
}

/// In-memory document.
#[derive(Debug)]
pub struct MemoryPage {
    doc: RefCell<Document>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Create a document containing `<html>` and `<body>`, 1024 wide.
    pub fn new() -> Self {
        let html = ElementData {
            tag: "html".into(),
            children: vec![BODY],
            ..Default::default()
        };
        let body = ElementData {
            tag: "body".into(),
            parent: Some(ROOT),
            ..Default::default()
        };
        Self {
            doc: RefCell::new(Document {
                nodes: vec![html, body],
                scroll_y: 0.0,
                inner_width: 1024.0,
                scroll_requests: Vec::new(),
            }),
        }
    }

    /// The `<html>` element
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// The `<body>` element
    pub fn body_node(&self) -> NodeId {
        BODY
    }

    /// Append a new element as the last child of `parent`.
    pub fn append(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        doc.nodes.push(ElementData {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            ..Default::default()
        });
        doc.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        let mut doc = self.doc.borrow_mut();
        doc.nodes[node.0].id = Some(id.to_string());
        doc.nodes[node.0]
            .attributes
            .insert("id".to_string(), id.to_string());
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if name == "id" {
            self.set_id(node, value);
            return;
        }
        if name == "class" {
            let mut doc = self.doc.borrow_mut();
            doc.nodes[node.0].classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        self.doc.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Set the current value of a form control
    pub fn set_value(&self, node: NodeId, value: &str) {
        self.doc.borrow_mut().nodes[node.0].value = value.to_string();
    }

    pub fn value(&self, node: NodeId) -> String {
        self.doc.borrow().nodes[node.0].value.clone()
    }

    /// Place an element at a document-relative top with a height
    pub fn set_layout(&self, node: NodeId, top: f64, height: f64) {
        let mut doc = self.doc.borrow_mut();
        doc.nodes[node.0].top = top;
        doc.nodes[node.0].height = height;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.doc.borrow_mut().scroll_y = y;
    }

    pub fn set_inner_width(&self, width: f64) {
        self.doc.borrow_mut().inner_width = width;
    }

    /// Targets of every smooth scroll request, oldest first
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.doc.borrow().scroll_requests.clone()
    }

    /// Inline style property, if set
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.doc.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.doc.borrow().nodes[node.0].disabled
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.doc.borrow().nodes[node.0].classes.clone()
    }

    fn descendants(doc: &Document, from: NodeId, out: &mut Vec<NodeId>) {
        for &child in &doc.nodes[from.0].children {
            out.push(child);
            Self::descendants(doc, child, out);
        }
    }

    fn document_order(doc: &Document) -> Vec<NodeId> {
        let mut out = vec![ROOT];
        Self::descendants(doc, ROOT, &mut out);
        out
    }
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '#' | '.' | '[')
}

fn parse_compound(src: &str) -> Compound {
    let mut compound = Compound::default();
    let tag_end = src.find(is_delimiter).unwrap_or(src.len());
    if tag_end > 0 && &src[..tag_end] != "*" {
        compound.tag = Some(src[..tag_end].to_ascii_lowercase());
    }
    let mut rest = &src[tag_end..];
    while let Some(c) = rest.chars().next() {
        match c {
            '[' => {
                let end = rest.find(']').unwrap_or(rest.len());
                let inner = &rest[1..end];
                let attribute = match inner.split_once('=') {
                    Some((name, value)) => (
                        name.trim().to_string(),
                        Some(value.trim().trim_matches(|c| c == '"' || c == '\'').to_string()),
                    ),
                    None => (inner.trim().to_string(), None),
                };
                compound.attributes.push(attribute);
                rest = rest.get(end + 1..).unwrap_or("");
            }
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(is_delimiter).unwrap_or(body.len());
                let name = body[..end].to_string();
                if c == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
                rest = &body[end..];
            }
            _ => break,
        }
    }
    compound
}

/// Comma list of descendant chains
fn parse_selector(selector: &str) -> Vec<Vec<Compound>> {
    selector
        .split(',')
        .map(|part| part.split_whitespace().map(parse_compound).collect::<Vec<_>>())
        .filter(|chain| !chain.is_empty())
        .collect()
}

fn matches_compound(data: &ElementData, compound: &Compound) -> bool {
    if let Some(tag) = &compound.tag {
        if &data.tag != tag {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if data.id.as_ref() != Some(id) {
            return false;
        }
    }
    if !compound.classes.iter().all(|c| data.classes.contains(c)) {
        return false;
    }
    compound.attributes.iter().all(|(name, expected)| {
        let actual = if name == "class" {
            (!data.classes.is_empty()).then(|| data.classes.join(" "))
        } else {
            data.attributes.get(name).cloned()
        };
        match (actual, expected) {
            (Some(actual), Some(expected)) => &actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        }
    })
}

fn matches_chain(doc: &Document, node: NodeId, chain: &[Compound]) -> bool {
    let Some((last, ancestors)) = chain.split_last() else {
        return false;
    };
    if !matches_compound(&doc.nodes[node.0], last) {
        return false;
    }
    let mut cursor = doc.nodes[node.0].parent;
    for compound in ancestors.iter().rev() {
        loop {
            match cursor {
                Some(candidate) => {
                    cursor = doc.nodes[candidate.0].parent;
                    if matches_compound(&doc.nodes[candidate.0], compound) {
                        break;
                    }
                }
                None => return false,
            }
        }
    }
    true
}

fn matches_any(doc: &Document, node: NodeId, chains: &[Vec<Compound>]) -> bool {
    chains.iter().any(|chain| matches_chain(doc, node, chain))
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        Self::document_order(&doc)
            .into_iter()
            .find(|node| doc.nodes[node.0].id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let chains = parse_selector(selector);
        let doc = self.doc.borrow();
        Self::document_order(&doc)
            .into_iter()
            .filter(|&node| matches_any(&doc, node, &chains))
            .collect()
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        let chains = parse_selector(selector);
        let doc = self.doc.borrow();
        let mut nodes = Vec::new();
        Self::descendants(&doc, *scope, &mut nodes);
        nodes
            .into_iter()
            .find(|&node| matches_any(&doc, node, &chains))
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let doc = self.doc.borrow();
        let data = &doc.nodes[node.0];
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let doc = self.doc.borrow();
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = doc.nodes[current.0].parent;
        }
        false
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.doc.borrow_mut();
        let classes = &mut doc.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.doc.borrow_mut().nodes[node.0]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.doc.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.doc.borrow_mut().nodes[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn text(&self, node: &NodeId) -> String {
        self.doc.borrow().nodes[node.0].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.doc.borrow_mut().nodes[node.0].text = text.to_string();
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.doc.borrow_mut().nodes[node.0].disabled = disabled;
    }

    fn form_value(&self, form: &NodeId, name: &str) -> Option<String> {
        let doc = self.doc.borrow();
        let mut nodes = Vec::new();
        Self::descendants(&doc, *form, &mut nodes);
        nodes
            .into_iter()
            .find(|node| doc.nodes[node.0].attributes.get("name").map(String::as_str) == Some(name))
            .map(|node| doc.nodes[node.0].value.clone())
    }

    fn reset_form(&self, form: &NodeId) {
        let mut doc = self.doc.borrow_mut();
        let mut nodes = Vec::new();
        Self::descendants(&doc, *form, &mut nodes);
        for node in nodes {
            doc.nodes[node.0].value.clear();
        }
    }

    fn bounding_top(&self, node: &NodeId) -> f64 {
        let doc = self.doc.borrow();
        doc.nodes[node.0].top - doc.scroll_y
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.doc.borrow().nodes[node.0].height
    }

    fn scroll_y(&self) -> f64 {
        self.doc.borrow().scroll_y
    }

    fn inner_width(&self) -> f64 {
        self.doc.borrow().inner_width
    }

    fn smooth_scroll_to(&self, top: f64) {
        let mut doc = self.doc.borrow_mut();
        doc.scroll_requests.push(top);
        doc.scroll_y = top;
    }
}
