//! PlaceIndex building, mutation, and validation.

use crate::error::{PlaceDataError, Result};
use crate::loader;
use crate::types::{Category, Place, PlaceIndex};
use std::path::Path;
use tracing::info;

impl PlaceIndex {
    /// Load the full dataset from a directory containing `places.json`
    /// and `categories.json`.
    ///
    /// The two files are independent, so they are parsed in parallel.
    /// Referential integrity is checked once everything is inserted.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let places_path = data_dir.join("places.json");
        let categories_path = data_dir.join("categories.json");

        let (places, categories) = rayon::join(
            || loader::parse_places(&places_path),
            || loader::parse_categories(&categories_path),
        );
        let places = places?;
        let categories = categories?;

        info!(
            places = places.len(),
            categories = categories.len(),
            "parsed seed files"
        );

        let mut index = PlaceIndex::new();
        for category in categories {
            index.insert_category(category)?;
        }
        for place in places {
            index.insert_place(place)?;
        }

        index.validate()?;
        info!("place index built and validated");
        Ok(index)
    }

    /// Insert a category into the index.
    ///
    /// Rejects empty and duplicate ids.
    pub fn insert_category(&mut self, category: Category) -> Result<()> {
        if category.id.is_empty() {
            return Err(PlaceDataError::InvalidValue {
                field: "category.id".to_string(),
                value: category.id,
            });
        }
        if self.categories.contains_key(&category.id) {
            return Err(PlaceDataError::DuplicateId {
                entity: "category".to_string(),
                id: category.id,
            });
        }
        self.categories.insert(category.id.clone(), category);
        Ok(())
    }

    /// Insert a place into the index and update the category index.
    ///
    /// This is the precondition boundary for the filter engine: malformed
    /// records (empty id/name/address, duplicate id) are rejected here so
    /// the engine never has to consider them.
    pub fn insert_place(&mut self, place: Place) -> Result<()> {
        for (field, value) in [
            ("place.id", &place.id),
            ("place.name", &place.name),
            ("place.address", &place.address),
        ] {
            if value.trim().is_empty() {
                return Err(PlaceDataError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
        if self.places.contains_key(&place.id) {
            return Err(PlaceDataError::DuplicateId {
                entity: "place".to_string(),
                id: place.id,
            });
        }

        self.ordering.push(place.id.clone());
        self.category_index
            .entry(place.category_id.clone())
            .or_default()
            .push(place.id.clone());
        self.places.insert(place.id.clone(), place);
        Ok(())
    }

    /// Check referential integrity: every place must point at a known
    /// category.
    pub fn validate(&self) -> Result<()> {
        for place in self.all_places() {
            if !self.categories.contains_key(&place.category_id) {
                return Err(PlaceDataError::MissingReference {
                    entity: "category".to_string(),
                    id: place.category_id.clone(),
                });
            }
        }
        if self.ordering.len() != self.places.len() {
            return Err(PlaceDataError::Validation(
                "ordering and place store out of sync".to_string(),
            ));
        }
        Ok(())
    }
}
