use crate::dom::{Document, NodeId};

const OPEN_CLASS: &str = "nav-open";
const ACTIVE_CLASS: &str = "active";

/// The mobile navigation toggle button and the nav it opens.
#[derive(Debug, Clone, Copy)]
pub struct MenuToggle {
    toggle: NodeId,
    nav: NodeId,
}

impl MenuToggle {
    pub fn attach(doc: &Document) -> Option<Self> {
        let toggle = doc.first_by_class("menu-toggle")?;
        let nav = doc.first_by_class("nav")?;
        Some(Self { toggle, nav })
    }

    pub fn toggle_node(&self) -> NodeId {
        self.toggle
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.element(self.nav).is_some_and(|e| e.has_class(OPEN_CLASS))
    }

    /// Opens or closes the menu; returns whether it is now open.
    pub fn toggle(&self, doc: &mut Document) -> bool {
        let expanded = doc
            .element_mut(self.nav)
            .map(|nav| nav.toggle_class(OPEN_CLASS))
            .unwrap_or(false);
        self.render(doc, expanded);
        expanded
    }

    pub fn close(&self, doc: &mut Document) {
        if let Some(nav) = doc.element_mut(self.nav) {
            nav.remove_class(OPEN_CLASS);
        }
        self.render(doc, false);
    }

    fn render(&self, doc: &mut Document, expanded: bool) {
        if let Some(toggle) = doc.element_mut(self.toggle) {
            toggle.set_class(ACTIVE_CLASS, expanded);
            toggle.set_attr("aria-expanded", if expanded { "true" } else { "false" });
        }

        let icon = doc.descendant_by_tag(self.toggle, "i").unwrap_or(self.toggle);
        if let Some(icon) = doc.element_mut(icon) {
            let (glyph, label) = if expanded {
                ("✕", "Cerrar menú")
            } else {
                ("☰", "Abrir menú")
            };
            icon.set_text(glyph);
            icon.set_attr("aria-label", label);
        }
    }

    /// Routes a click anywhere on the page.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) {
        if doc.contains(self.toggle, target) {
            self.toggle(doc);
            return;
        }

        let on_link = doc
            .descendants(self.nav)
            .into_iter()
            .filter(|&node| doc.element(node).is_some_and(|e| e.tag() == "a"))
            .any(|link| doc.contains(link, target));
        let outside = !doc.contains(self.nav, target);

        if on_link || outside {
            self.close(doc);
        }
    }
}
