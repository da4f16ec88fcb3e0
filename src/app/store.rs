//! State + dispatch pair handed to the screens that host a filter sheet.
//!
//! [`FilterStore`] owns one [`FilterState`] and replaces it on every
//! dispatch. Dispatches are expected to arrive on a single control flow; the
//! store does no locking of its own.

use super::actions::FilterAction;
use super::display::selected_options_union;
use super::params::FilterParams;
use super::reducer::reduce;
use super::state::FilterState;
use crate::domain::FilterArray;

/// Owner of the filter state for one screen.
///
/// # Example
///
/// ```rust
/// use artwork_filters::{FilterAction, FilterOption, FilterParamName, FilterStore};
///
/// let mut store = FilterStore::new();
/// store.dispatch(FilterAction::SelectOption(FilterOption::new(
///     FilterParamName::PriceRange,
///     "5000-10000",
///     "$5k-10k",
/// )));
/// assert!(store.pending_fetch().is_none());
///
/// store.dispatch(FilterAction::Commit);
/// let params = store.pending_fetch().unwrap();
/// assert_eq!(params.price_range, "5000-10000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterState,
    dispatched: u64,
}

impl FilterStore {
    /// Creates a store holding the empty initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs an action through the reducer and returns the new state.
    pub fn dispatch(&mut self, action: FilterAction) -> &FilterState {
        let _span = tracing::debug_span!("dispatch", action = action.kind(), seq = self.dispatched).entered();

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
        self.dispatched += 1;

        tracing::debug!(
            applied = self.state.applied_filters.len(),
            selected = self.state.selected_filters.len(),
            apply_filters = self.state.apply_filters,
            "state updated"
        );

        &self.state
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of actions dispatched so far.
    #[must_use]
    pub const fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Options the selection UI should show as checked.
    #[must_use]
    pub fn selected_options_display(&self) -> FilterArray {
        selected_options_union(&self.state.selected_filters, &self.state.previously_applied_filters)
    }

    /// Query parameters for the applied filter set.
    #[must_use]
    pub fn request_params(&self) -> FilterParams {
        FilterParams::from_applied(&self.state.applied_filters)
    }

    /// Query parameters to refetch with, present only right after a commit.
    #[must_use]
    pub fn pending_fetch(&self) -> Option<FilterParams> {
        self.state.apply_filters.then(|| self.request_params())
    }
}
