use crate::core::announcer::Announcer;
use crate::core::filter::partition;
use crate::core::presenter::ResultPresenter;
use crate::domain::model::{FilterState, ResultSummary};
use crate::domain::ports::{lock_page, SearchControls, SearchPage, SharedPage};
use crate::utils::debounce::Debouncer;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_INPUT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Where keyboard focus goes after the filters are reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterReset {
    FocusSearch,
    BlurSearch,
}

struct SearchInner<P> {
    page: SharedPage<P>,
    presenter: ResultPresenter,
    announcer: Announcer<P>,
}

impl<P: SearchPage> SearchInner<P> {
    fn filter_pass(&self) -> ResultSummary {
        let mut page = lock_page(&self.page);
        self.filter_pass_on(&mut page)
    }

    fn filter_pass_on(&self, page: &mut P) -> ResultSummary {
        let state = read_state(page);
        let cards = page.destination_cards();
        let parts = partition(&cards, &state);
        let summary = self.presenter.present(page, &parts);
        self.announcer.announce_results_on(page, summary);

        tracing::debug!(
            "Filter pass: query={:?} continent={:?} -> {}/{} visible",
            state.query(),
            state.continent(),
            summary.visible,
            summary.total
        );
        summary
    }
}

fn read_state<P: SearchControls + ?Sized>(page: &P) -> FilterState {
    FilterState::new(
        &page.search_query().unwrap_or_default(),
        &page.continent_selection().unwrap_or_default(),
    )
}

/// Connects the search inputs to the filter engine, the presenter and the
/// announcer. Only exists on pages that have the search controls and cards.
pub struct SearchController<P> {
    inner: Arc<SearchInner<P>>,
    input: Debouncer<()>,
}

impl<P: SearchPage> SearchController<P> {
    /// Returns `None` when the page lacks the search input, the continent
    /// selector or any destination card.
    pub fn attach(
        page: SharedPage<P>,
        announcer: Announcer<P>,
        input_debounce: Duration,
    ) -> Option<Self> {
        let presenter = ResultPresenter::default();
        {
            let mut guard = lock_page(&page);
            if guard.search_query().is_none() || guard.continent_selection().is_none() {
                tracing::debug!("Search controls not found, destination search disabled");
                return None;
            }
            let total = guard.destination_cards().len();
            if total == 0 {
                tracing::debug!("No destination cards on page, destination search disabled");
                return None;
            }
            presenter.update_counter(&mut *guard, ResultSummary { visible: total, total });
            tracing::info!("🔎 Destination search ready for {} cards", total);
        }

        let inner = Arc::new(SearchInner {
            page,
            presenter,
            announcer,
        });
        let debounced = Arc::clone(&inner);
        let input = Debouncer::new(input_debounce, move |()| {
            debounced.filter_pass();
        });

        Some(Self { inner, input })
    }

    /// Runs one filter pass with the current input values.
    pub fn filter_now(&self) -> ResultSummary {
        self.inner.filter_pass()
    }

    pub fn current_state(&self) -> FilterState {
        read_state(&*lock_page(&self.inner.page))
    }

    /// Typing in the search box; the pass runs once typing pauses.
    pub fn on_search_input(&self) {
        self.input.call(());
    }

    pub fn on_continent_change(&self) -> ResultSummary {
        self.filter_now()
    }

    pub fn on_clear_filters(&self) -> ResultSummary {
        self.reset(AfterReset::FocusSearch)
    }

    pub fn on_search_escape(&self) -> ResultSummary {
        self.reset(AfterReset::BlurSearch)
    }

    /// The "clear filters" action inside the no-results placeholder.
    pub fn on_placeholder_clear(&self) -> ResultSummary {
        self.reset(AfterReset::FocusSearch)
    }

    pub fn has_pending_input(&self) -> bool {
        self.input.is_pending()
    }

    fn reset(&self, after: AfterReset) -> ResultSummary {
        self.input.cancel();

        let mut page = lock_page(&self.inner.page);
        page.set_search_query("");
        page.set_continent_selection("");
        let summary = self.inner.filter_pass_on(&mut page);
        match after {
            AfterReset::FocusSearch => page.focus_search(),
            AfterReset::BlurSearch => page.blur_search(),
        }
        summary
    }
}
