use crate::domain::messages::{CounterMessage, NoResultsPlaceholder, Notification};
use crate::domain::model::{CardVisibility, Continent, DestinationCard};
use crate::domain::ports::{
    CardCollection, LiveRegion, NotificationSurface, PlaceholderState, ResultsDisplay,
    SearchControls,
};
use std::cell::Cell;

/// In-memory page used by the core unit tests.
#[derive(Debug)]
pub(crate) struct FakePage {
    pub search: Option<String>,
    pub continent: Option<String>,
    pub search_focused: bool,
    pub cards: Vec<DestinationCard>,
    pub visibility: Vec<CardVisibility>,
    pub visibility_reads: Cell<usize>,
    pub visibility_writes: usize,
    pub has_counter: bool,
    pub counter: Option<CounterMessage>,
    pub has_grid: bool,
    pub placeholder: PlaceholderState,
    pub placeholder_inserts: usize,
    pub live_region: Option<String>,
    pub live_history: Vec<String>,
    pub notifications: Vec<FakeNotification>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeNotification {
    pub notification: Notification,
    pub entered: bool,
    pub dismissed: bool,
    pub removed: bool,
}

impl FakePage {
    pub fn with_cards(cards: Vec<DestinationCard>) -> Self {
        let visibility = vec![CardVisibility::Shown; cards.len()];
        Self {
            search: Some(String::new()),
            continent: Some(String::new()),
            search_focused: false,
            cards,
            visibility,
            visibility_reads: Cell::new(0),
            visibility_writes: 0,
            has_counter: true,
            counter: None,
            has_grid: true,
            placeholder: PlaceholderState::Missing,
            placeholder_inserts: 0,
            live_region: Some(String::new()),
            live_history: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn sample() -> Self {
        Self::with_cards(vec![
            DestinationCard::new(Some(Continent::Europe), "Paris France"),
            DestinationCard::new(Some(Continent::Asia), "Tokyo Japan"),
        ])
    }

    pub fn bare() -> Self {
        Self {
            search: None,
            continent: None,
            has_counter: false,
            has_grid: false,
            live_region: None,
            ..Self::with_cards(Vec::new())
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_visible())
            .map(|(i, _)| i)
            .collect()
    }
}

impl SearchControls for FakePage {
    fn search_query(&self) -> Option<String> {
        self.search.clone()
    }

    fn set_search_query(&mut self, value: &str) {
        if let Some(search) = self.search.as_mut() {
            *search = value.to_string();
        }
    }

    fn continent_selection(&self) -> Option<String> {
        self.continent.clone()
    }

    fn set_continent_selection(&mut self, value: &str) {
        if let Some(continent) = self.continent.as_mut() {
            *continent = value.to_string();
        }
    }

    fn focus_search(&mut self) {
        self.search_focused = self.search.is_some();
    }

    fn blur_search(&mut self) {
        self.search_focused = false;
    }
}

impl CardCollection for FakePage {
    fn destination_cards(&self) -> Vec<DestinationCard> {
        self.cards.clone()
    }

    fn cards_visible(&self) -> Vec<bool> {
        self.visibility_reads.set(self.visibility_reads.get() + 1);
        self.visibility.iter().map(|v| v.is_visible()).collect()
    }

    fn apply_card_visibility(&mut self, visibility: &[CardVisibility]) {
        self.visibility_writes += 1;
        for (slot, next) in self.visibility.iter_mut().zip(visibility) {
            *slot = *next;
        }
    }
}

impl ResultsDisplay for FakePage {
    fn render_counter(&mut self, message: &CounterMessage) {
        if self.has_counter {
            self.counter = Some(*message);
        }
    }

    fn placeholder_state(&self) -> PlaceholderState {
        self.placeholder
    }

    fn insert_placeholder(&mut self, _placeholder: &NoResultsPlaceholder) -> bool {
        if !self.has_grid {
            return false;
        }
        self.placeholder_inserts += 1;
        self.placeholder = PlaceholderState::Visible;
        true
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        if self.placeholder != PlaceholderState::Missing {
            self.placeholder = if visible {
                PlaceholderState::Visible
            } else {
                PlaceholderState::Hidden
            };
        }
    }
}

impl LiveRegion for FakePage {
    fn set_live_text(&mut self, text: &str) -> bool {
        match self.live_region.as_mut() {
            Some(region) => {
                *region = text.to_string();
                self.live_history.push(text.to_string());
                true
            }
            None => false,
        }
    }

    fn live_text(&self) -> Option<String> {
        self.live_region.clone()
    }
}

impl NotificationSurface for FakePage {
    type Handle = usize;

    fn show_notification(&mut self, notification: &Notification) -> Option<usize> {
        self.notifications.push(FakeNotification {
            notification: notification.clone(),
            entered: false,
            dismissed: false,
            removed: false,
        });
        Some(self.notifications.len() - 1)
    }

    fn enter_notification(&mut self, handle: usize) {
        if let Some(n) = self.notifications.get_mut(handle) {
            n.entered = true;
        }
    }

    fn dismiss_notification(&mut self, handle: usize) {
        if let Some(n) = self.notifications.get_mut(handle) {
            n.dismissed = true;
        }
    }

    fn remove_notification(&mut self, handle: usize) {
        if let Some(n) = self.notifications.get_mut(handle) {
            n.removed = true;
        }
    }
}
