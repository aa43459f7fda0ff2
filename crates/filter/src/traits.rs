//! Core trait for the place filtering pipeline.

use crate::criteria::FilterCriteria;
use place_data::Place;

/// A single narrowing stage over a candidate list of places.
///
/// All stages must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows stages to be shared across threads
/// - Stages take ownership of the `Vec<Place>` and return the surviving
///   subset, which keeps the relative order intact without re-allocation
///   of the survivors
/// - Filtering is total: every well-formed input produces a result, so
///   `apply` is infallible (malformed places are rejected upstream, at
///   record construction)
pub trait PlaceFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of places.
    ///
    /// # Arguments
    /// * `places` - The candidate places (takes ownership)
    /// * `criteria` - The live filter criteria from the UI state
    ///
    /// # Returns
    /// The surviving places, in their original relative order.
    fn apply(&self, places: Vec<Place>, criteria: &FilterCriteria) -> Vec<Place>;
}
