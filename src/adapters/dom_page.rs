//! Port implementations over the in-memory [`Document`].

use crate::dom::{Document, NodeId};
use crate::domain::messages::{CounterMessage, NoResultsPlaceholder, Notification};
use crate::domain::model::{CardVisibility, Continent, DestinationCard};
use crate::domain::ports::{
    CardCollection, LiveRegion, NotificationSurface, PlaceholderState, ResultsDisplay,
    SearchControls,
};

/// Ids, classes and attributes that give page elements their role.
pub mod roles {
    pub const SEARCH_INPUT: &str = "search-destinations";
    pub const CONTINENT_FILTER: &str = "continent-filter";
    pub const CARD_CONTINENT_ATTR: &str = "data-continent";
    pub const CLEAR_BUTTON: &str = "clear-filters";
    pub const RESULTS_COUNTER: &str = "search-results-counter";
    pub const CARD_GRID_CLASS: &str = "card-grid";
    pub const LIVE_REGION: &str = "live-region";
    pub const NO_RESULTS: &str = "no-results-message";
    pub const NO_RESULTS_CLEAR: &str = "clear-from-no-results";
    pub const SEARCH_STYLES: &str = "search-styles";
}

pub const CARD_ENTRANCE_ANIMATION: &str = "fadeIn 0.3s ease-in";

const SEARCH_STYLES_CSS: &str = r#"
@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}
@keyframes fadeOut {
  from { opacity: 1; transform: translateY(0); }
  to { opacity: 0; transform: translateY(-10px); }
}
.card { transition: all 0.3s ease; }
#search-destinations:focus,
#continent-filter:focus {
  outline: 2px solid var(--primary-color);
  outline-offset: 2px;
}
.no-results { animation: fadeIn 0.5s ease-in; }
"#;

fn card_nodes(doc: &Document) -> Vec<NodeId> {
    doc.elements_with_attr(roles::CARD_CONTINENT_ATTR)
}

fn set_displayed(doc: &mut Document, node: NodeId, displayed: bool) {
    if let Some(element) = doc.element_mut(node) {
        element.set_style("display", if displayed { "block" } else { "none" });
    }
}

/// Adds the search animation styles to the head once. Returns `false` when
/// they were already installed.
pub fn install_search_styles(doc: &mut Document) -> bool {
    if doc.get_element_by_id(roles::SEARCH_STYLES).is_some() {
        return false;
    }
    let head = doc.head();
    doc.append_element(head, "style", |e| {
        e.set_id(roles::SEARCH_STYLES);
        e.set_text(SEARCH_STYLES_CSS);
    });
    true
}

impl SearchControls for Document {
    fn search_query(&self) -> Option<String> {
        let input = self.get_element_by_id(roles::SEARCH_INPUT)?;
        self.element(input).map(|e| e.value().to_string())
    }

    fn set_search_query(&mut self, value: &str) {
        if let Some(input) = self.get_element_by_id(roles::SEARCH_INPUT) {
            if let Some(element) = self.element_mut(input) {
                element.set_value(value);
            }
        }
    }

    fn continent_selection(&self) -> Option<String> {
        let select = self.get_element_by_id(roles::CONTINENT_FILTER)?;
        self.element(select).map(|e| e.value().to_string())
    }

    fn set_continent_selection(&mut self, value: &str) {
        if let Some(select) = self.get_element_by_id(roles::CONTINENT_FILTER) {
            if let Some(element) = self.element_mut(select) {
                element.set_value(value);
            }
        }
    }

    fn focus_search(&mut self) {
        if let Some(input) = self.get_element_by_id(roles::SEARCH_INPUT) {
            self.focus(input);
        }
    }

    fn blur_search(&mut self) {
        if let Some(input) = self.get_element_by_id(roles::SEARCH_INPUT) {
            self.blur(input);
        }
    }
}

impl CardCollection for Document {
    fn destination_cards(&self) -> Vec<DestinationCard> {
        card_nodes(self)
            .into_iter()
            .map(|node| {
                let tag = self
                    .element(node)
                    .and_then(|e| e.attr(roles::CARD_CONTINENT_ATTR))
                    .unwrap_or_default();
                let continent = match tag.parse::<Continent>() {
                    Ok(continent) => Some(continent),
                    Err(e) => {
                        tracing::debug!("Card without a known continent: {}", e);
                        None
                    }
                };
                DestinationCard::new(continent, self.text_content(node))
            })
            .collect()
    }

    fn cards_visible(&self) -> Vec<bool> {
        card_nodes(self)
            .into_iter()
            .map(|node| self.element(node).is_some_and(|e| e.is_displayed()))
            .collect()
    }

    fn apply_card_visibility(&mut self, visibility: &[CardVisibility]) {
        for (node, &next) in card_nodes(self).into_iter().zip(visibility) {
            set_displayed(self, node, next.is_visible());
            if let Some(element) = self.element_mut(node) {
                match next {
                    CardVisibility::Entering => element.set_style("animation", CARD_ENTRANCE_ANIMATION),
                    CardVisibility::Hidden => element.remove_style("animation"),
                    CardVisibility::Shown => {}
                }
            }
        }
    }
}

impl ResultsDisplay for Document {
    fn render_counter(&mut self, message: &CounterMessage) {
        if let Some(counter) = self.get_element_by_id(roles::RESULTS_COUNTER) {
            if let Some(element) = self.element_mut(counter) {
                element.set_inner_html(&message.html());
            }
        }
    }

    fn placeholder_state(&self) -> PlaceholderState {
        match self
            .get_element_by_id(roles::NO_RESULTS)
            .and_then(|node| self.element(node))
        {
            None => PlaceholderState::Missing,
            Some(element) if element.is_displayed() => PlaceholderState::Visible,
            Some(_) => PlaceholderState::Hidden,
        }
    }

    fn insert_placeholder(&mut self, placeholder: &NoResultsPlaceholder) -> bool {
        let Some(grid) = self.first_by_class(roles::CARD_GRID_CLASS) else {
            return false;
        };

        let block = self.create_element("div");
        if let Some(element) = self.element_mut(block) {
            element.set_id(roles::NO_RESULTS);
            element.add_class("no-results");
        }
        let content = self.append_element(block, "div", |e| e.add_class("no-results-content"));
        self.append_element(content, "div", |e| {
            e.add_class("no-results-icon");
            e.set_text(placeholder.icon);
        });
        self.append_element(content, "h3", |e| e.set_text(placeholder.heading));
        self.append_element(content, "p", |e| e.set_text(placeholder.hint));
        self.append_element(content, "button", |e| {
            e.set_id(roles::NO_RESULTS_CLEAR);
            e.set_text(placeholder.action_label);
        });

        self.insert_after(grid, block)
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        if let Some(block) = self.get_element_by_id(roles::NO_RESULTS) {
            set_displayed(self, block, visible);
        }
    }
}

impl LiveRegion for Document {
    fn set_live_text(&mut self, text: &str) -> bool {
        let Some(region) = self.get_element_by_id(roles::LIVE_REGION) else {
            return false;
        };
        match self.element_mut(region) {
            Some(element) => {
                element.set_text(text);
                true
            }
            None => false,
        }
    }

    fn live_text(&self) -> Option<String> {
        let region = self.get_element_by_id(roles::LIVE_REGION)?;
        self.element(region).map(|e| e.own_text().to_string())
    }
}

impl NotificationSurface for Document {
    type Handle = NodeId;

    fn show_notification(&mut self, notification: &Notification) -> Option<NodeId> {
        let body = self.body();
        let kind = notification.kind;
        let node = self.append_element(body, "div", |e| {
            e.add_class("notification");
            e.add_class(&format!("notification-{}", kind.as_str()));
            e.set_attr("role", "status");
            e.set_text(&notification.message);
            for (property, value) in [
                ("position", "fixed"),
                ("top", "20px"),
                ("right", "20px"),
                ("padding", "15px 20px"),
                ("border-radius", "5px"),
                ("color", "white"),
                ("z-index", "1000"),
                ("transition", "transform 0.3s ease"),
                ("transform", "translateX(100%)"),
            ] {
                e.set_style(property, value);
            }
            e.set_style("background-color", kind.background_color());
        });
        Some(node)
    }

    fn enter_notification(&mut self, handle: NodeId) {
        if let Some(element) = self.element_mut(handle) {
            element.set_style("transform", "translateX(0)");
        }
    }

    fn dismiss_notification(&mut self, handle: NodeId) {
        if let Some(element) = self.element_mut(handle) {
            element.set_style("transform", "translateX(100%)");
        }
    }

    fn remove_notification(&mut self, handle: NodeId) {
        self.remove(handle);
    }
}
