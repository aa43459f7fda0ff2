//! Active-flag stage.
//!
//! Unlike the text and category stages this one is unconditional: it is
//! applied on every invocation, so inactive (soft-deleted) places never
//! reach a filtered view.

use crate::criteria::FilterCriteria;
use crate::traits::PlaceFilter;
use place_data::Place;

/// Removes places whose `is_active` flag is false.
pub struct ActiveFilter;

impl PlaceFilter for ActiveFilter {
    fn name(&self) -> &str {
        "ActiveFilter"
    }

    fn apply(&self, places: Vec<Place>, _criteria: &FilterCriteria) -> Vec<Place> {
        places.into_iter().filter(|place| place.is_active).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_places_are_dropped() {
        let make = |id: &str, active: bool| Place {
            id: id.to_string(),
            name: format!("Place {id}"),
            address: "Andong-si".to_string(),
            description: None,
            cuisine: None,
            category_id: "food".to_string(),
            is_active: active,
            latitude: 36.5684,
            longitude: 128.7294,
            image_url: None,
        };
        let places = vec![make("p1", true), make("p2", false), make("p3", true)];

        let result = ActiveFilter.apply(places, &FilterCriteria::new());
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }
}
