use super::menu::MenuToggle;
use super::Key;
use crate::adapters::dom_page::roles;
use crate::dom::{Document, NodeId};

const KEYBOARD_CLASS: &str = "keyboard-navigation";

/// Returns the polite live region, creating it at the end of the body if
/// the page does not carry one yet.
pub fn ensure_live_region(doc: &mut Document) -> NodeId {
    if let Some(region) = doc.get_element_by_id(roles::LIVE_REGION) {
        return region;
    }

    let body = doc.body();
    doc.append_element(body, "div", |e| {
        e.set_id(roles::LIVE_REGION);
        e.set_attr("aria-live", "polite");
        e.set_attr("aria-atomic", "true");
        e.add_class("sr-only");
    })
}

/// Marks the nav links pointing at the current page. Returns how many
/// links were marked.
pub fn highlight_current_page(doc: &mut Document) -> usize {
    let current = doc.location_path();
    let links: Vec<NodeId> = doc
        .elements_by_class("nav")
        .into_iter()
        .flat_map(|nav| doc.descendants(nav))
        .filter(|&node| doc.element(node).is_some_and(|e| e.tag() == "a"))
        .collect();

    let mut highlighted = 0;
    for link in links {
        let target = doc
            .element(link)
            .and_then(|e| e.attr("href"))
            .and_then(|href| doc.resolve_path(href));
        let is_current = match target.as_deref() {
            Some(path) if path == current => true,
            // "/" is served by index.html
            Some(path) => current == "/" && path.trim_end_matches(".html").ends_with("/index"),
            None => false,
        };
        if is_current {
            if let Some(element) = doc.element_mut(link) {
                element.add_class("active");
                element.set_attr("aria-current", "page");
                highlighted += 1;
            }
        }
    }
    highlighted
}

/// Keyboard handling shared by every page.
pub fn handle_keydown(doc: &mut Document, key: &Key, menu: Option<&MenuToggle>) {
    match key {
        Key::Tab => {
            let body = doc.body();
            if let Some(body) = doc.element_mut(body) {
                body.add_class(KEYBOARD_CLASS);
            }
        }
        Key::Escape => {
            if let Some(menu) = menu.filter(|m| m.is_open(doc)) {
                menu.close(doc);
                doc.focus(menu.toggle_node());
            }
        }
        Key::Other(_) => {}
    }
}

pub fn handle_mousedown(doc: &mut Document) {
    let body = doc.body();
    if let Some(body) = doc.element_mut(body) {
        body.remove_class(KEYBOARD_CLASS);
    }
}

/// The "skip to content" link.
#[derive(Debug, Clone, Copy)]
pub struct SkipLink {
    link: NodeId,
}

impl SkipLink {
    pub fn attach(doc: &Document) -> Option<Self> {
        doc.first_by_class("skip-link").map(|link| Self { link })
    }

    /// Moves focus to the link target. Returns `true` when the click was on
    /// the link.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> bool {
        if !doc.contains(self.link, target) {
            return false;
        }

        let destination = doc
            .element(self.link)
            .and_then(|e| e.attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .and_then(|id| doc.get_element_by_id(id));
        match destination {
            Some(destination) => {
                doc.focus(destination);
                doc.scroll_into_view(destination);
            }
            None => tracing::debug!("Skip link target is missing"),
        }
        true
    }
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
    fn test_live_region_is_created_once() {
        let mut doc = page();
        let region = ensure_live_region(&mut doc);
        assert_eq!(ensure_live_region(&mut doc), region);

        let element = doc.element(region).unwrap();
        assert_eq!(element.attr("aria-live"), Some("polite"));
        assert_eq!(element.attr("aria-atomic"), Some("true"));
        assert!(element.has_class("sr-only"));
    }

    #[test]
    fn test_current_page_link_is_highlighted() {
        let mut doc = page();
        assert_eq!(highlight_current_page(&mut doc), 1);

        let active = doc.elements_by_class("active");
        assert_eq!(active.len(), 1);
        let link = doc.element(active[0]).unwrap();
        assert_eq!(link.attr("href"), Some("destinos.html"));
        assert_eq!(link.attr("aria-current"), Some("page"));
    }

    #[test]
    fn test_site_root_highlights_index_link() {
        let mut config = SiteConfig::default();
        config.site.current_path = "/".to_string();
        let mut doc = PageBuilder::new(&config).build();

        assert_eq!(highlight_current_page(&mut doc), 1);
        let active = doc.elements_by_class("active")[0];
        assert_eq!(doc.element(active).unwrap().attr("href"), Some("index.html"));
    }

    #[test]
    fn test_tab_and_mouse_toggle_keyboard_mode() {
        let mut doc = page();
        let body = doc.body();

        handle_keydown(&mut doc, &Key::Tab, None);
        assert!(doc.element(body).unwrap().has_class(KEYBOARD_CLASS));

        handle_mousedown(&mut doc);
        assert!(!doc.element(body).unwrap().has_class(KEYBOARD_CLASS));
    }

    #[test]
    fn test_escape_closes_menu_and_focuses_toggle() {
        let mut doc = page();
        let menu = MenuToggle::attach(&doc).unwrap();
        menu.toggle(&mut doc);

        handle_keydown(&mut doc, &Key::Escape, Some(&menu));

        assert!(!menu.is_open(&doc));
        assert_eq!(doc.active_element(), Some(menu.toggle_node()));
    }

    #[test]
    fn test_escape_with_closed_menu_keeps_focus() {
        let mut doc = page();
        let menu = MenuToggle::attach(&doc).unwrap();

        handle_keydown(&mut doc, &Key::Escape, Some(&menu));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_skip_link_focuses_main() {
        let mut doc = page();
        let skip = SkipLink::attach(&doc).unwrap();
        let link = doc.first_by_class("skip-link").unwrap();
        let main = doc.get_element_by_id("main").unwrap();

        assert!(skip.handle_click(&mut doc, link));
        assert_eq!(doc.active_element(), Some(main));
        assert!(!skip.handle_click(&mut doc, main));
    }
}
