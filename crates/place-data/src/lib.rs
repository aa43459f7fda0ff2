//! # Place Data Crate
//!
//! This crate holds the persisted-data schema of the Andong places
//! application and an in-memory index over it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Place, Category, UserProfile, ChatMessage, PlaceIndex)
//! - **loader**: Parse JSON seed files into Rust structs
//! - **index**: Build and validate the PlaceIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use place_data::PlaceIndex;
//! use std::path::Path;
//!
//! let index = PlaceIndex::load_from_dir(Path::new("data/andong"))?;
//!
//! let place = index.get_place("hahoe-village").unwrap();
//! println!("{} @ {}", place.name, place.address);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod loader;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{PlaceDataError, Result};
pub use types::{
    // Type aliases
    PlaceId,
    CategoryId,
    UserId,
    // Core types
    Place,
    Category,
    UserProfile,
    ChatMessage,
    ChatRole,
    PlaceIndex,
};
