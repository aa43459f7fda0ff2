//! The FilterPipeline chains narrowing stages.

use crate::criteria::FilterCriteria;
use crate::traits::PlaceFilter;
use place_data::Place;
use tracing;

/// Chains multiple filter stages into a sequential narrowing of the
/// candidate set: each stage's output is the next stage's input, and the
/// final order equals the input order restricted to survivors.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextSearchFilter)
///     .add_filter(CategoryFilter)
///     .add_filter(ActiveFilter);
///
/// let filtered = pipeline.apply(places, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn PlaceFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter stage to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl PlaceFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all stages in order to the candidate places.
    pub fn apply(&self, places: Vec<Place>, criteria: &FilterCriteria) -> Vec<Place> {
        let mut current = places;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, criteria);
            tracing::debug!(
                filter = filter.name(),
                input = before,
                output = current.len(),
                "applied filter stage"
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ActiveFilter, CategoryFilter};

    fn place(id: &str, category: &str, active: bool) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {id}"),
            address: "Andong-si".to_string(),
            description: None,
            cuisine: None,
            category_id: category.to_string(),
            is_active: active,
            latitude: 36.5684,
            longitude: 128.7294,
            image_url: None,
        }
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = FilterPipeline::new();
        let places = vec![place("p1", "food", true), place("p2", "cafe", false)];

        let filtered = pipeline.apply(places.clone(), &FilterCriteria::new());
        assert_eq!(filtered, places);
    }

    #[test]
    fn test_stages_compose() {
        let pipeline = FilterPipeline::new()
            .add_filter(CategoryFilter)
            .add_filter(ActiveFilter);
        let places = vec![
            place("p1", "food", true),
            place("p2", "food", false),
            place("p3", "cafe", true),
        ];

        let filtered = pipeline.apply(places, &FilterCriteria::new().with_category("food"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p1");
    }
}
