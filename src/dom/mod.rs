//! A small in-memory element tree standing in for the browser document.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Removed nodes stay
//! in the arena but are no longer connected, so queries skip them.

pub mod builder;

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    inner_html: Option<String>,
    value: String,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn set_id(&mut self, id: &str) {
        self.set_attr("id", id);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn add_class(&mut self, name: &str) {
        self.classes.insert(name.to_string());
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    /// Flips the class and returns whether it is now present.
    pub fn toggle_class(&mut self, name: &str) -> bool {
        if self.classes.remove(name) {
            false
        } else {
            self.classes.insert(name.to_string());
            true
        }
    }

    pub fn set_class(&mut self, name: &str, present: bool) {
        if present {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    pub fn remove_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    pub fn is_displayed(&self) -> bool {
        self.style("display") != Some("none")
    }

    pub fn own_text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.inner_html = None;
    }

    /// Stores markup; the text form is the markup with tags stripped.
    pub fn set_inner_html(&mut self, html: &str) {
        self.text = strip_tags(html);
        self.inner_html = Some(html.to_string());
    }

    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

fn strip_tags(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    tag.replace_all(html, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    active: Option<NodeId>,
    scroll_y: f64,
    viewport_width: u32,
    location: String,
    last_scrolled_into_view: Option<NodeId>,
}

impl Document {
    pub fn new(location: &str) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            active: None,
            scroll_y: 0.0,
            viewport_width: 1280,
            location: location.to_string(),
            last_scrolled_into_view: None,
        };
        doc.root = doc.create_element("html");
        doc.head = doc.append_element(doc.root, "head", |_| {});
        doc.body = doc.append_element(doc.root, "body", |_| {});
        doc
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element: Element::new(tag),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates an element, lets `init` fill it in and appends it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        init: impl FnOnce(&mut Element),
    ) -> NodeId {
        let id = self.create_element(tag);
        init(&mut self.nodes[id.0].element);
        self.append_child(parent, id);
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).map(|n| &mut n.element)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Inserts `node` as the next sibling of `reference`.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> bool {
        if node.0 >= self.nodes.len() || self.contains(node, reference) {
            return false;
        }
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        self.detach(node);
        let siblings = &mut self.nodes[parent.0].children;
        let position = siblings
            .iter()
            .position(|&c| c == reference)
            .map_or(siblings.len(), |p| p + 1);
        siblings.insert(position, node);
        self.nodes[node.0].parent = Some(parent);
        true
    }

    pub fn remove(&mut self, node: NodeId) {
        self.detach(node);
        if self.active.is_some_and(|a| self.contains(node, a)) {
            self.active = None;
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes.get(node.0).and_then(|n| n.parent) {
            self.nodes[parent.0].children.retain(|&c| c != node);
            self.nodes[node.0].parent = None;
        }
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|&c| c == node)?;
        siblings.get(position + 1).copied()
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Descendants of `node` in document order, `node` excluded.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| predicate(&self.nodes[id.0].element))
            .collect()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_all(|e| e.id() == Some(id)).into_iter().next()
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.elements_by_class(class).into_iter().next()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(|e| e.tag() == tag)
    }

    pub fn elements_with_attr(&self, name: &str) -> Vec<NodeId> {
        self.find_all(|e| e.attr(name).is_some())
    }

    pub fn descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|&id| self.nodes[id.0].element.tag() == tag)
    }

    /// Text of the node and all of its descendants, separated by single spaces.
    pub fn text_content(&self, node: NodeId) -> String {
        std::iter::once(node)
            .chain(self.descendants(node))
            .filter_map(|id| self.element(id))
            .map(|e| e.own_text().trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn focus(&mut self, node: NodeId) {
        if self.is_connected(node) {
            self.active = Some(node);
        }
    }

    pub fn blur(&mut self, node: NodeId) {
        if self.active == Some(node) {
            self.active = None;
        }
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn scroll_into_view(&mut self, node: NodeId) {
        if self.is_connected(node) {
            self.last_scrolled_into_view = Some(node);
        }
    }

    pub fn last_scrolled_into_view(&self) -> Option<NodeId> {
        self.last_scrolled_into_view
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn location_path(&self) -> String {
        Url::parse(&self.location)
            .map(|url| url.path().to_string())
            .unwrap_or_else(|_| "/".to_string())
    }

    /// Resolves an `href` against the document location.
    pub fn resolve_path(&self, href: &str) -> Option<String> {
        let base = Url::parse(&self.location).ok()?;
        base.join(href).ok().map(|url| url.path().to_string())
    }
}
