//! Place filtering pipeline for the Andong places application.
//!
//! This crate provides:
//! - The PlaceFilter trait and the three concrete narrowing stages
//!   (text search, category, active flag)
//! - FilterPipeline for composing stages
//! - `filter_places`, the pure entry point the state layer calls
//!
//! ## Architecture
//! Filtering is a sequential narrowing of the candidate set:
//! 1. Text stage matches the query against name/address/description/cuisine
//!    (skipped for an empty or whitespace-only query)
//! 2. Category stage keeps the selected category (skipped when none selected)
//! 3. Active stage unconditionally drops soft-deleted places
//!
//! The result is always a subsequence of the input: stages filter, never
//! sort.
//!
//! ## Example Usage
//! ```ignore
//! use filter::{filter_places, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_query("jjimdak")
//!     .with_category("food");
//! let visible = filter_places(&places, &criteria);
//! ```

pub mod criteria;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use engine::{filter_places, search_pipeline};
pub use filter_pipeline::FilterPipeline;
pub use traits::PlaceFilter;
