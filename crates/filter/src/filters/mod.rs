//! Filter stage implementations for the place pipeline.

pub mod active;
pub mod category;
pub mod text_search;

// Re-export for convenience
pub use active::ActiveFilter;
pub use category::CategoryFilter;
pub use text_search::TextSearchFilter;
