use crate::domain::messages::{CounterMessage, NoResultsPlaceholder, Notification};
use crate::domain::model::{CardVisibility, DestinationCard};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// 每個方法在對應元素不存在時都必須是無操作，而不是錯誤

/// The search text input, the continent selector and the clear button.
pub trait SearchControls {
    /// `None` when the search input is absent.
    fn search_query(&self) -> Option<String>;
    fn set_search_query(&mut self, value: &str);
    /// `None` when the continent selector is absent.
    fn continent_selection(&self) -> Option<String>;
    fn set_continent_selection(&mut self, value: &str);
    fn focus_search(&mut self);
    fn blur_search(&mut self);
}

/// The destination cards, in document order.
///
/// Visibility is read and written for the whole set at once so that a filter
/// pass resolves the cards a single time.
pub trait CardCollection {
    fn destination_cards(&self) -> Vec<DestinationCard>;
    /// Whether each card is currently shown.
    fn cards_visible(&self) -> Vec<bool>;
    /// One entry per card; entries past the last card are ignored.
    fn apply_card_visibility(&mut self, visibility: &[CardVisibility]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderState {
    Missing,
    Visible,
    Hidden,
}

/// The results counter and the "no results" placeholder.
pub trait ResultsDisplay {
    fn render_counter(&mut self, message: &CounterMessage);
    fn placeholder_state(&self) -> PlaceholderState;
    /// Inserts the placeholder right after the card grid. Returns `false`
    /// when there is no grid to anchor it to.
    fn insert_placeholder(&mut self, placeholder: &NoResultsPlaceholder) -> bool;
    fn set_placeholder_visible(&mut self, visible: bool);
}

pub trait LiveRegion {
    /// Returns `false` when the page has no live region.
    fn set_live_text(&mut self, text: &str) -> bool;
    fn live_text(&self) -> Option<String>;
}

pub trait NotificationSurface {
    type Handle: Copy + Send + 'static;

    /// Adds the notification off-screen.
    fn show_notification(&mut self, notification: &Notification) -> Option<Self::Handle>;
    /// Slides a freshly shown notification into view.
    fn enter_notification(&mut self, handle: Self::Handle);
    /// Starts the exit transition.
    fn dismiss_notification(&mut self, handle: Self::Handle);
    fn remove_notification(&mut self, handle: Self::Handle);
}

/// Everything the search feature needs from the page.
pub trait SearchPage:
    SearchControls + CardCollection + ResultsDisplay + LiveRegion + Send + 'static
{
}

impl<T> SearchPage for T where
    T: SearchControls + CardCollection + ResultsDisplay + LiveRegion + Send + 'static
{
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

/// The page, shared between event handlers and timer callbacks.
pub type SharedPage<P> = Arc<Mutex<P>>;

pub fn share<P>(page: P) -> SharedPage<P> {
    Arc::new(Mutex::new(page))
}

/// Locks the page, recovering from a poisoned lock.
pub fn lock_page<P>(page: &Mutex<P>) -> MutexGuard<'_, P> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}
