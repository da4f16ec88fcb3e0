//! Filter reconciliation state.
//!
//! [`FilterState`] is a plain value. The reducer never mutates one in place;
//! every transition consumes the previous state and returns the next.
//!
//! # State Components
//!
//! - **Selected**: tentative picks made while the selection sheet is open
//! - **Previously applied**: snapshot of the last commit, used as the
//!   reconciliation base for the next selection round
//! - **Applied**: the committed set driving the artwork query; never contains
//!   default values
//! - **Apply flag**: true for exactly one transition after a commit
//! - **Aggregations**: facet counts, passed through untouched

use crate::domain::{Aggregations, FilterArray, FilterOption};
use serde::{Deserialize, Serialize};

/// The full reconciliation state for one filtered screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// In-progress user picks, not yet committed.
    pub selected_filters: FilterArray,

    /// What was committed the last time filters were applied.
    pub previously_applied_filters: FilterArray,

    /// The committed, externally visible filter set.
    pub applied_filters: FilterArray,

    /// Signals collaborators to re-issue the data fetch.
    ///
    /// Set by a commit and cleared by every other transition.
    pub apply_filters: bool,

    /// Facet-count buckets for the current result set.
    pub aggregations: Aggregations,
}

impl FilterState {
    /// Creates the empty initial state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use artwork_filters::FilterState;
    ///
    /// let state = FilterState::new();
    /// assert!(state.applied_filters.is_empty());
    /// assert!(!state.apply_filters);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the applied option for a dimension, if one is committed.
    ///
    /// For the artist dimension this is the first applied artist.
    #[must_use]
    pub fn applied_for(&self, option: &FilterOption) -> Option<&FilterOption> {
        self.applied_filters
            .iter()
            .find(|applied| applied.param_name == option.param_name)
    }
}
