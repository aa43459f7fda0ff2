//! Free-text search stage.
//!
//! Matches the query against every searchable text field of a place.

use crate::criteria::FilterCriteria;
use crate::traits::PlaceFilter;
use place_data::Place;

/// Keeps places whose text fields contain the search query.
///
/// ## Algorithm
/// 1. Normalize the query (trim + lowercase); an empty result means the
///    stage is a no-op and every candidate survives
/// 2. A place survives iff ANY of `name`, `address`, `description`,
///    `cuisine` contains the needle, compared case-insensitively
/// 3. An absent `description`/`cuisine` fails only that sub-check
pub struct TextSearchFilter;

fn field_matches(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn optional_field_matches(field: Option<&str>, needle: &str) -> bool {
    field.map(|f| field_matches(f, needle)).unwrap_or(false)
}

impl PlaceFilter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn apply(&self, places: Vec<Place>, criteria: &FilterCriteria) -> Vec<Place> {
        // Empty/whitespace query acts as "no filter", not "match nothing".
        let Some(needle) = criteria.normalized_query() else {
            return places;
        };

        places
            .into_iter()
            .filter(|place| {
                field_matches(&place.name, &needle)
                    || field_matches(&place.address, &needle)
                    || optional_field_matches(place.description.as_deref(), &needle)
                    || optional_field_matches(place.cuisine.as_deref(), &needle)
            })
            .collect()
    }
}
