//! Place list state and the derived filtered view.
//!
//! This store owns the candidate place list and the live filter criteria,
//! and upholds the reactive-recomputation contract: whenever the places,
//! the search query, or the selected category change, it re-invokes the
//! pure filter engine and replaces the cached derived view. The engine
//! itself never reads this store; it only sees the snapshot it is handed.

use filter::{filter_places, FilterCriteria};
use place_data::{CategoryId, Place};
use tokio::sync::watch;
use tracing::debug;

/// Holds the full place list, the current filter criteria, and the
/// cached filtered view derived from them.
pub struct PlaceListState {
    places: Vec<Place>,
    criteria: FilterCriteria,
    /// Derived view; the watch channel doubles as the cache and the
    /// notification mechanism for subscribers.
    filtered_tx: watch::Sender<Vec<Place>>,
}

impl PlaceListState {
    /// Create the store around an initial place list.
    pub fn new(places: Vec<Place>) -> Self {
        let criteria = FilterCriteria::new();
        let (filtered_tx, _rx) = watch::channel(filter_places(&places, &criteria));
        Self {
            places,
            criteria,
            filtered_tx,
        }
    }

    /// Replace the candidate list (e.g. after a data refresh).
    pub fn set_places(&mut self, places: Vec<Place>) {
        self.places = places;
        self.refresh();
    }

    /// Update the free-text search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.refresh();
    }

    /// Select a category, or pass `None` to lift the restriction.
    pub fn select_category(&mut self, category_id: Option<CategoryId>) {
        self.criteria.category_id = category_id;
        self.refresh();
    }

    /// Reset the query and category selection.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
        self.refresh();
    }

    pub fn search_query(&self) -> &str {
        &self.criteria.search_query
    }

    pub fn selected_category(&self) -> Option<&CategoryId> {
        self.criteria.category_id.as_ref()
    }

    /// The full (unfiltered) place list.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Snapshot of the current filtered view.
    pub fn filtered(&self) -> Vec<Place> {
        self.filtered_tx.borrow().clone()
    }

    /// Observe every replacement of the filtered view.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Place>> {
        self.filtered_tx.subscribe()
    }

    fn refresh(&mut self) {
        let filtered = filter_places(&self.places, &self.criteria);
        debug!(
            total = self.places.len(),
            visible = filtered.len(),
            "re-derived filtered place view"
        );
        self.filtered_tx.send_replace(filtered);
    }
}
