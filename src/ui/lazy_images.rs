use crate::dom::{Document, NodeId};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionSupport {
    Available,
    Unavailable,
}

/// Images carrying `data-src` that have not been loaded yet.
#[derive(Debug, Default)]
pub struct LazyImages {
    observed: BTreeSet<NodeId>,
}

impl LazyImages {
    /// Without intersection support every image is loaded right away.
    pub fn attach(doc: &mut Document, support: IntersectionSupport) -> Self {
        let images: Vec<NodeId> = doc
            .elements_with_attr("data-src")
            .into_iter()
            .filter(|&node| doc.element(node).is_some_and(|e| e.tag() == "img"))
            .collect();

        match support {
            IntersectionSupport::Available => Self {
                observed: images.into_iter().collect(),
            },
            IntersectionSupport::Unavailable => {
                for image in images {
                    load_image(doc, image);
                }
                Self::default()
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Loads the observed images among `entries` and stops observing them.
    pub fn on_intersect(&mut self, doc: &mut Document, entries: &[NodeId]) -> usize {
        let mut loaded = 0;
        for entry in entries {
            if self.observed.remove(entry) {
                load_image(doc, *entry);
                loaded += 1;
            }
        }
        loaded
    }
}

fn load_image(doc: &mut Document, image: NodeId) {
    if let Some(element) = doc.element_mut(image) {
        if let Some(source) = element.attr("data-src").map(str::to_string) {
            element.set_attr("src", &source);
        }
        element.remove_class("lazy");
        element.add_class("loaded");
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
    fn test_intersecting_images_load_once() {
        let mut doc = page();
        let mut lazy = LazyImages::attach(&mut doc, IntersectionSupport::Available);
        let images = doc.elements_by_tag("img");
        assert_eq!(lazy.pending(), images.len());
        assert!(doc.element(images[0]).unwrap().attr("src").is_none());

        assert_eq!(lazy.on_intersect(&mut doc, &images[..1]), 1);
        assert_eq!(lazy.on_intersect(&mut doc, &images[..1]), 0);

        let first = doc.element(images[0]).unwrap();
        assert_eq!(first.attr("src"), Some("images/parís.jpg"));
        assert!(first.has_class("loaded"));
        assert!(!first.has_class("lazy"));
        assert_eq!(lazy.pending(), images.len() - 1);
    }

    #[test]
    fn test_fallback_loads_everything() {
        let mut doc = page();
        let lazy = LazyImages::attach(&mut doc, IntersectionSupport::Unavailable);

        assert_eq!(lazy.pending(), 0);
        for image in doc.elements_by_tag("img") {
            assert!(doc.element(image).unwrap().attr("src").is_some());
        }
    }
}
