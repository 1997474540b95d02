// Page glue shared by every page of the site (menu, scroll, images, a11y, carousel).

pub mod accessibility;
pub mod carousel;
pub mod lazy_images;
pub mod menu;
pub mod scroll;

pub use carousel::Carousels;
pub use lazy_images::{IntersectionSupport, LazyImages};
pub use menu::MenuToggle;
pub use scroll::ScrollEffects;

/// Keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}
