//! Actions dispatched into the filter reducer.
//!
//! This module defines [`FilterAction`], the closed set of inputs the
//! reducer understands. Actions are plain data; they can be built in code or
//! parsed from JSON in the `{"type": ..., "payload": ...}` shape used by the
//! screens that host the filter sheet.
//!
//! # Example
//!
//! ```rust
//! use artwork_filters::{FilterAction, FilterOption, FilterParamName};
//!
//! let select: FilterAction = serde_json::from_str(
//!     r#"{"type":"selectFilters","payload":{"paramName":"medium","paramValue":"Painting","displayText":"Painting"}}"#,
//! )?;
//! assert_eq!(
//!     select,
//!     FilterAction::SelectOption(FilterOption::new(FilterParamName::Medium, "Painting", "Painting"))
//! );
//!
//! let commit: FilterAction = serde_json::from_str(r#"{"type":"applyFilters"}"#)?;
//! assert_eq!(commit, FilterAction::Commit);
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::domain::{Aggregations, FilterArray, FilterOption};
use serde::{Deserialize, Serialize};

/// Inputs accepted by [`reduce`](crate::app::reduce).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum FilterAction {
    /// The user toggled a candidate filter value.
    #[serde(rename = "selectFilters")]
    SelectOption(FilterOption),

    /// The user confirmed the pending selection.
    #[serde(rename = "applyFilters")]
    Commit,

    /// Discards the in-progress selection without committing.
    #[serde(rename = "clearAll")]
    ClearAll,

    /// Returns to the committed baseline, e.g. when the sheet is closed
    /// without applying.
    #[serde(rename = "resetFilters")]
    Reset,

    /// Commits an empty filter set to escape a zero-result screen.
    #[serde(rename = "clearFiltersZeroState")]
    ClearAllToEmptyResult,

    /// Replaces the facet-count metadata.
    #[serde(rename = "setAggregations")]
    SetAggregations(Aggregations),

    /// Seeds the state from an externally supplied filter set.
    #[serde(rename = "setInitialFilterState")]
    SetInitialFilterState(FilterArray),
}

impl FilterAction {
    /// Short name used in logs and spans.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectOption(_) => "selectFilters",
            Self::Commit => "applyFilters",
            Self::ClearAll => "clearAll",
            Self::Reset => "resetFilters",
            Self::ClearAllToEmptyResult => "clearFiltersZeroState",
            Self::SetAggregations(_) => "setAggregations",
            Self::SetInitialFilterState(_) => "setInitialFilterState",
        }
    }
}
