use crate::domain::messages::Announcement;
use crate::domain::model::ResultSummary;
use crate::domain::ports::{lock_page, LiveRegion, SharedPage};
use crate::utils::debounce::Debouncer;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_millis(1000);

/// Writes status messages into the page's live region and empties it again
/// after `clear_after`, so that a repeated message is announced again.
pub struct Announcer<P> {
    page: SharedPage<P>,
    clear: Arc<Debouncer<()>>,
}

impl<P> Clone for Announcer<P> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            clear: Arc::clone(&self.clear),
        }
    }
}

impl<P: LiveRegion + Send + 'static> Announcer<P> {
    pub fn new(page: SharedPage<P>, clear_after: Duration) -> Self {
        let target = Arc::clone(&page);
        let clear = Debouncer::new(clear_after, move |()| {
            lock_page(&target).set_live_text("");
        });
        Self {
            page,
            clear: Arc::new(clear),
        }
    }

    pub fn announce(&self, message: &str) {
        let mut page = lock_page(&self.page);
        self.announce_on(&mut page, message);
    }

    /// Same as [`announce`](Self::announce) for callers already holding the page lock.
    pub fn announce_on(&self, page: &mut P, message: &str) {
        if page.set_live_text(message) {
            self.clear.call(());
        }
    }

    pub fn announce_results(&self, summary: ResultSummary) {
        let mut page = lock_page(&self.page);
        self.announce_results_on(&mut page, summary);
    }

    pub fn announce_results_on(&self, page: &mut P, summary: ResultSummary) {
        let message = Announcement::for_count(summary.visible).message();
        self.announce_on(page, &message);
    }
}
