//! Core domain types for the Andong places dataset.
//!
//! This module defines the persisted-data schema shared by the whole
//! workspace: places, categories, user profiles, and chat history, plus
//! the in-memory [`PlaceIndex`] that holds them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// Identifiers are opaque strings coming from the persisted schema
// (e.g. "food", "heritage", "place-0042"). The aliases keep signatures
// honest about which kind of id is expected.

/// Unique identifier for a place
pub type PlaceId = String;

/// Unique identifier for a category
pub type CategoryId = String;

/// Unique identifier for a user
pub type UserId = String;

// =============================================================================
// Place-related Types
// =============================================================================

/// A point-of-interest record: restaurant, heritage site, cafe, etc.
///
/// `description` and `cuisine` are optional; a missing field is simply
/// absent data, not an error. `cuisine` only carries a value for
/// restaurants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Every place belongs to exactly one category.
    pub category_id: CategoryId,
    /// Soft-delete marker: inactive places are permanently hidden from
    /// filtered views, regardless of any other criteria.
    pub is_active: bool,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A classification group a place belongs to (e.g. "food", "heritage").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

// =============================================================================
// User & Chat Types
// =============================================================================

/// A user record from the persisted schema.
///
/// Consumed by the session store; the data layer itself never interprets
/// these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    /// Unix timestamp (milliseconds) when the message was created
    pub timestamp: i64,
}

// =============================================================================
// PlaceIndex - The Core In-Memory Database
// =============================================================================

/// Holds the full place and category data with lookup indices.
///
/// Insert order is preserved: [`PlaceIndex::all_places`] yields places in
/// the order they were inserted, which downstream consumers (the filter
/// engine in particular) rely on as the canonical display order.
#[derive(Debug, Default)]
pub struct PlaceIndex {
    // Primary data stores
    pub(crate) places: HashMap<PlaceId, Place>,
    pub(crate) categories: HashMap<CategoryId, Category>,

    /// Place ids in insert order
    pub(crate) ordering: Vec<PlaceId>,

    // Secondary index: places grouped by category, in insert order
    pub(crate) category_index: HashMap<CategoryId, Vec<PlaceId>>,
}

impl PlaceIndex {
    /// Creates a new, empty PlaceIndex
    pub fn new() -> Self {
        Self::default()
    }

    // Getters return references; the index keeps ownership of the data.

    /// Get a place by id
    pub fn get_place(&self, id: &str) -> Option<&Place> {
        self.places.get(id)
    }

    /// Get a category by id
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Ids of all places in a category, in insert order.
    ///
    /// Returns an empty slice for an unknown category.
    pub fn places_in_category(&self, category_id: &str) -> &[PlaceId] {
        self.category_index
            .get(category_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All places in insert order.
    pub fn all_places(&self) -> impl Iterator<Item = &Place> {
        self.ordering.iter().filter_map(|id| self.places.get(id))
    }

    /// All categories sorted by `sort_order`, then id for a stable tie-break.
    pub fn categories_sorted(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.values().collect();
        categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.id.cmp(&b.id)));
        categories
    }

    /// (place count, category count) for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.places.len(), self.categories.len())
    }
}
