use heartsync_shared::middleware::record_filters_applied;

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::models::{FilterSettings, FilterUpdate};

use super::Store;

impl<E: Environment> Store<E> {
    /// Plain merge; empty gender sets and inverted age ranges are the
    /// caller's to reject.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.state.filters.apply(update);
        tracing::debug!(filters = ?self.state.filters, "filters updated");
        self.publish(StoreEvent::FiltersUpdated);
    }

    /// Rebuilds the deck from the master list, so previously swiped users
    /// who pass come back. Returns the new deck size.
    pub fn apply_filters(&mut self) -> usize {
        let candidates = self.state.queue.apply(&self.state.filters);
        tracing::info!(
            candidates,
            total = self.state.queue.master().len(),
            "filters applied"
        );
        record_filters_applied(candidates);
        self.publish(StoreEvent::FiltersApplied { candidates });
        candidates
    }

    /// Back to default settings and the full, unfiltered deck.
    pub fn clear_filters(&mut self) {
        self.state.filters = FilterSettings::default();
        self.state.queue.reset();
        tracing::info!(candidates = self.state.queue.len(), "filters cleared");
        self.publish(StoreEvent::FiltersCleared);
    }
}
