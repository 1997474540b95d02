use crate::dom::{Document, NodeId};

pub const AUTOPLAY_DELAY_MS: u64 = 5000;

/// Slides shown side by side for a viewport width.
pub fn slides_per_view(width: u32) -> u32 {
    match width {
        w if w >= 1024 => 3,
        w if w >= 768 => 2,
        _ => 1,
    }
}

/// The `.swiper` carousels on the page.
#[derive(Debug, Clone)]
pub struct Carousels {
    nodes: Vec<NodeId>,
}

impl Carousels {
    pub fn attach(doc: &mut Document) -> Option<Self> {
        let nodes = doc.elements_by_class("swiper");
        if nodes.is_empty() {
            return None;
        }

        for &node in &nodes {
            if let Some(element) = doc.element_mut(node) {
                element.set_attr("data-loop", "true");
                element.set_attr("data-autoplay-delay", &AUTOPLAY_DELAY_MS.to_string());
            }
        }
        let carousels = Self { nodes };
        carousels.layout(doc);
        tracing::debug!("Attached {} carousel(s)", carousels.nodes.len());
        Some(carousels)
    }

    /// Applies the breakpoint for the current viewport width.
    pub fn layout(&self, doc: &mut Document) {
        let per_view = slides_per_view(doc.viewport_width()).to_string();
        for &node in &self.nodes {
            if let Some(element) = doc.element_mut(node) {
                element.set_attr("data-slides-per-view", &per_view);
            }
        }
    }
}
