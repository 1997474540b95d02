use crate::domain::model::{DestinationCard, FilterState, Partition};

/// A card is visible when it contains the query and sits on the selected continent.
pub fn card_matches(card: &DestinationCard, state: &FilterState) -> bool {
    let matches_search = state.query().is_empty() || card.text.to_lowercase().contains(state.query());
    let matches_continent = state.continent().matches(card.continent);
    matches_search && matches_continent
}

/// Splits the cards into visible and hidden indices. Every card is
/// re-evaluated on every call.
pub fn partition(cards: &[DestinationCard], state: &FilterState) -> Partition {
    let mut result = Partition::default();
    for (index, card) in cards.iter().enumerate() {
        if card_matches(card, state) {
            result.visible.push(index);
        } else {
            result.hidden.push(index);
        }
    }
    result
}
