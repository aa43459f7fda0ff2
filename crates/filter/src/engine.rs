//! The canonical place search pipeline and its pure-function entry point.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ActiveFilter, CategoryFilter, TextSearchFilter};
use place_data::Place;

/// The three-stage pipeline the application uses for place search:
/// text match, then category restriction, then the unconditional
/// active-flag check.
pub fn search_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(TextSearchFilter)
        .add_filter(CategoryFilter)
        .add_filter(ActiveFilter)
}

/// Filter a snapshot of places against the given criteria.
///
/// Pure function of its inputs: never mutates `places`, holds no state
/// between invocations, and preserves the relative order of the input.
/// The surrounding state layer is responsible for re-invoking it whenever
/// the place list, search query, or selected category changes.
pub fn filter_places(places: &[Place], criteria: &FilterCriteria) -> Vec<Place> {
    search_pipeline().apply(places.to_vec(), criteria)
}
