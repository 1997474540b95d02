use crate::dom::{Document, NodeId};

pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const BODY_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct ScrollEffects {
    header: Option<NodeId>,
}

impl ScrollEffects {
    pub fn attach(doc: &Document) -> Self {
        Self {
            header: doc.first_by_class("header"),
        }
    }

    /// Runs on every scroll event.
    pub fn on_scroll(&self, doc: &mut Document) {
        let scrolled = doc.scroll_y() > HEADER_SCROLL_THRESHOLD;
        if let Some(header) = self.header.and_then(|h| doc.element_mut(h)) {
            header.set_class("scrolled", scrolled);
        }
    }
}

/// Runs from the throttled scroll handler.
pub fn update_body_scrolled(doc: &mut Document) {
    let scrolled = doc.scroll_y() > BODY_SCROLL_THRESHOLD;
    let body = doc.body();
    if let Some(body) = doc.element_mut(body) {
        body.set_class("scrolled", scrolled);
    }
}

/// Smooth scrolling for in-page links. Returns `true` when the click landed
/// on an `href="#..."` anchor, which then must not navigate.
pub fn handle_anchor_click(doc: &mut Document, target: NodeId) -> bool {
    let anchor = std::iter::successors(Some(target), |&node| doc.parent(node)).find(|&node| {
        doc.element(node)
            .is_some_and(|e| e.tag() == "a" && e.attr("href").is_some_and(|h| h.starts_with('#')))
    });
    let Some(anchor) = anchor else {
        return false;
    };

    let target_id = doc
        .element(anchor)
        .and_then(|e| e.attr("href"))
        .map(|href| href[1..].to_string())
        .unwrap_or_default();
    if let Some(destination) = doc.get_element_by_id(&target_id) {
        doc.scroll_into_view(destination);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::site::SiteConfig;
    use crate::dom::builder::PageBuilder;

    fn page() -> Document {
        PageBuilder::new(&SiteConfig::default()).build()
    }

    #[test]
    fn test_header_class_follows_threshold() {
        let mut doc = page();
        let effects = ScrollEffects::attach(&doc);
        let header = doc.first_by_class("header").unwrap();

        doc.set_scroll_y(150.0);
        effects.on_scroll(&mut doc);
        assert!(doc.element(header).unwrap().has_class("scrolled"));

        doc.set_scroll_y(100.0);
        effects.on_scroll(&mut doc);
        assert!(!doc.element(header).unwrap().has_class("scrolled"));
    }

    #[test]
    fn test_body_class_uses_lower_threshold() {
        let mut doc = page();
        doc.set_scroll_y(60.0);
        update_body_scrolled(&mut doc);
        assert!(doc.element(doc.body()).unwrap().has_class("scrolled"));
    }

    #[test]
    fn test_anchor_click_scrolls_target_into_view() {
        let mut doc = page();
        let skip = doc.first_by_class("skip-link").unwrap();
        let main = doc.get_element_by_id("main").unwrap();

        assert!(handle_anchor_click(&mut doc, skip));
        assert_eq!(doc.last_scrolled_into_view(), Some(main));

        let logo = doc.first_by_class("logo").unwrap();
        assert!(!handle_anchor_click(&mut doc, logo));
    }
}
