use crate::domain::messages::{CounterMessage, NoResultsPlaceholder};
use crate::domain::model::{CardVisibility, Partition, ResultSummary};
use crate::domain::ports::{CardCollection, PlaceholderState, ResultsDisplay};

/// Applies a filter partition to the page: card visibility, the "no results"
/// placeholder and the results counter.
#[derive(Debug, Clone, Default)]
pub struct ResultPresenter {
    placeholder: NoResultsPlaceholder,
}

impl ResultPresenter {
    pub fn new(placeholder: NoResultsPlaceholder) -> Self {
        Self { placeholder }
    }

    pub fn present<P>(&self, page: &mut P, partition: &Partition) -> ResultSummary
    where
        P: CardCollection + ResultsDisplay + ?Sized,
    {
        let shown_before = page.cards_visible();
        let mut next = vec![CardVisibility::Hidden; partition.total()];
        for &index in &partition.visible {
            if let Some(slot) = next.get_mut(index) {
                *slot = if shown_before.get(index).copied().unwrap_or(false) {
                    CardVisibility::Shown
                } else {
                    CardVisibility::Entering
                };
            }
        }
        page.apply_card_visibility(&next);

        let summary = partition.summary();
        self.toggle_no_results(page, summary.none_shown());
        self.update_counter(page, summary);
        summary
    }

    pub fn toggle_no_results<P>(&self, page: &mut P, show: bool)
    where
        P: ResultsDisplay + ?Sized,
    {
        match (show, page.placeholder_state()) {
            (true, PlaceholderState::Missing) => {
                if !page.insert_placeholder(&self.placeholder) {
                    tracing::debug!("No card grid to anchor the no-results placeholder");
                }
            }
            (true, PlaceholderState::Hidden) => page.set_placeholder_visible(true),
            (false, PlaceholderState::Visible) => page.set_placeholder_visible(false),
            (true, PlaceholderState::Visible)
            | (false, PlaceholderState::Hidden)
            | (false, PlaceholderState::Missing) => {}
        }
    }

    pub fn update_counter<P>(&self, page: &mut P, summary: ResultSummary)
    where
        P: ResultsDisplay + ?Sized,
    {
        page.render_counter(&CounterMessage::from_summary(summary));
    }
}
