//! Filter criteria derived from the live UI state.

use place_data::CategoryId;

/// The combination of free-text query and optional category selector
/// that narrows a place list.
///
/// Supplied fresh on every filtering invocation; the engine holds no
/// state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query; may be empty or whitespace-only, which means
    /// "no text restriction".
    pub search_query: String,
    /// When present, restricts results to this category.
    pub category_id: Option<CategoryId>,
}

impl FilterCriteria {
    /// Criteria that match every active place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query (builder pattern).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Restrict to a category (builder pattern).
    pub fn with_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// The search needle actually used for substring matching, or `None`
    /// when the query is empty or whitespace-only.
    ///
    /// The needle is trimmed and lowercased. Trimming happens before the
    /// substring search, so `" cafe "` matches the same places as
    /// `"cafe"` rather than requiring literal surrounding spaces.
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_queries_normalize_to_none() {
        assert_eq!(FilterCriteria::new().normalized_query(), None);
        assert_eq!(
            FilterCriteria::new().with_query("   \t").normalized_query(),
            None
        );
    }

    #[test]
    fn test_needle_is_trimmed_and_lowercased() {
        let criteria = FilterCriteria::new().with_query("  CAFE ");
        assert_eq!(criteria.normalized_query().as_deref(), Some("cafe"));
    }
}
