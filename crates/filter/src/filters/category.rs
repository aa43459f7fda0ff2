//! Category restriction stage.

use crate::criteria::FilterCriteria;
use crate::traits::PlaceFilter;
use place_data::Place;

/// Keeps places belonging to the selected category.
///
/// A no-op when no category is selected; otherwise exact equality on
/// `category_id`.
pub struct CategoryFilter;

impl PlaceFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(&self, places: Vec<Place>, criteria: &FilterCriteria) -> Vec<Place> {
        let Some(category_id) = &criteria.category_id else {
            return places;
        };

        places
            .into_iter()
            .filter(|place| &place.category_id == category_id)
            .collect()
    }
}
