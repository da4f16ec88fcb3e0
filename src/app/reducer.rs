//! The filter reconciliation reducer.
//!
//! [`reduce`] is a total function `(FilterState, FilterAction) -> FilterState`.
//! It performs no I/O and holds no hidden state; the only side effect is
//! debug-level tracing.
//!
//! # Transitions
//!
//! - **Select**: toggles artists by id, replaces other dimensions by name,
//!   then prunes redundant picks against the applied set
//! - **Commit**: merges selected over previously applied, drops defaults and
//!   pending artist de-selections, and raises the apply flag
//! - **Clear / Reset / Zero-state**: reset the working lists
//! - **Aggregations / Initial state**: replace one slice of the state
//!
//! # Example
//!
//! ```rust
//! use artwork_filters::{reduce, FilterAction, FilterOption, FilterParamName, FilterState};
//!
//! let painting = FilterOption::new(FilterParamName::Medium, "Painting", "Painting");
//!
//! let state = reduce(FilterState::new(), FilterAction::SelectOption(painting.clone()));
//! let state = reduce(state, FilterAction::Commit);
//!
//! assert_eq!(state.applied_filters, vec![painting]);
//! assert!(state.apply_filters);
//! assert!(state.selected_filters.is_empty());
//! ```

use super::actions::FilterAction;
use super::reconcile::{dedup_exact, is_pending_deselection, union_by, ReconciliationKey};
use super::state::FilterState;
use crate::domain::{is_default_option, FilterArray, FilterOption, ParamValue};

/// Computes the next state for an action.
#[must_use]
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SelectOption(option) => select_option(state, option),
        FilterAction::Commit => commit(state),
        FilterAction::ClearAll => FilterState {
            selected_filters: Vec::new(),
            previously_applied_filters: Vec::new(),
            apply_filters: false,
            ..state
        },
        FilterAction::Reset => FilterState {
            selected_filters: Vec::new(),
            previously_applied_filters: state.applied_filters.clone(),
            apply_filters: false,
            ..state
        },
        FilterAction::ClearAllToEmptyResult => FilterState {
            applied_filters: Vec::new(),
            selected_filters: Vec::new(),
            previously_applied_filters: Vec::new(),
            apply_filters: true,
            ..state
        },
        FilterAction::SetAggregations(aggregations) => FilterState {
            aggregations,
            apply_filters: false,
            ..state
        },
        FilterAction::SetInitialFilterState(options) => FilterState {
            previously_applied_filters: options.clone(),
            applied_filters: options,
            selected_filters: Vec::new(),
            apply_filters: false,
            ..state
        },
    }
}

/// Records a tentative pick and prunes picks that would change nothing.
fn select_option(state: FilterState, option: FilterOption) -> FilterState {
    let candidates = if option.is_artist() {
        toggle_artist(&state.selected_filters, option)
    } else {
        let incoming = [option];
        union_by(
            &[incoming.as_slice(), state.selected_filters.as_slice()],
            ReconciliationKey::of,
        )
    };

    let selected_filters: FilterArray = candidates
        .into_iter()
        .filter(|candidate| !is_redundant_selection(&state, candidate))
        .collect();

    tracing::debug!(selected = selected_filters.len(), "selection updated");

    FilterState {
        selected_filters,
        apply_filters: false,
        ..state
    }
}

/// Removes the artist from the selection if present, otherwise appends it.
fn toggle_artist(selected: &[FilterOption], option: FilterOption) -> FilterArray {
    let without: FilterArray = selected
        .iter()
        .filter(|existing| !(existing.is_artist() && existing.param_value == option.param_value))
        .cloned()
        .collect();

    if without.len() == selected.len() {
        let mut with = without;
        with.push(option);
        with
    } else {
        tracing::debug!(artist = ?option.param_value, "artist toggled off");
        without
    }
}

/// A pick is redundant when it would not change the applied set.
///
/// Without an applied entry for the dimension, only the default value is
/// redundant. With one, an identical value is redundant unless the dimension
/// is the artist kind.
fn is_redundant_selection(state: &FilterState, candidate: &FilterOption) -> bool {
    match state.applied_for(candidate) {
        None => is_default_option(candidate),
        Some(applied) if applied.param_value == candidate.param_value => !applied.is_artist(),
        Some(_) => false,
    }
}

/// Promotes the pending selection into the applied set.
fn commit(state: FilterState) -> FilterState {
    let selected = state.selected_filters.as_slice();
    let previous = state.previously_applied_filters.as_slice();

    let multi_value: FilterArray = union_by(&[selected, previous], ReconciliationKey::of)
        .into_iter()
        .filter(|option| option.param_value == Some(ParamValue::Flag(true)))
        .collect();

    let remaining: FilterArray = selected
        .iter()
        .chain(previous)
        .filter(|option| {
            !multi_value
                .iter()
                .any(|multi| multi.param_value == option.param_value)
        })
        .cloned()
        .collect();
    let single_value = union_by(&[remaining.as_slice()], ReconciliationKey::of);

    let candidates = dedup_exact(single_value.into_iter().chain(multi_value).collect());

    let applied_filters: FilterArray = candidates
        .into_iter()
        .filter(|option| {
            if option.is_artist() {
                !is_pending_deselection(option, previous, selected)
            } else {
                !is_default_option(option)
            }
        })
        .collect();

    tracing::debug!(
        selected = selected.len(),
        previously_applied = previous.len(),
        applied = applied_filters.len(),
        "filters committed"
    );

    FilterState {
        previously_applied_filters: applied_filters.clone(),
        applied_filters,
        selected_filters: Vec::new(),
        apply_filters: true,
        aggregations: state.aggregations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Aggregation, AggregationName, FilterParamName};

    fn medium(value: &str) -> FilterOption {
        FilterOption::new(FilterParamName::Medium, value, value)
    }

    fn sort(value: &str) -> FilterOption {
        FilterOption::new(FilterParamName::Sort, value, value)
    }

    fn flag(name: FilterParamName, value: bool) -> FilterOption {
        FilterOption::new(name, value, "flag")
    }

    fn run(state: FilterState, actions: impl IntoIterator<Item = FilterAction>) -> FilterState {
        actions.into_iter().fold(state, reduce)
    }

    fn applied(options: FilterArray) -> FilterState {
        reduce(FilterState::new(), FilterAction::SetInitialFilterState(options))
    }

    #[test]
    fn select_then_commit_applies_the_option() {
        let state = run(
            FilterState::new(),
            [FilterAction::SelectOption(medium("Painting")), FilterAction::Commit],
        );
        assert_eq!(state.applied_filters, vec![medium("Painting")]);
        assert_eq!(state.previously_applied_filters, vec![medium("Painting")]);
        assert!(state.selected_filters.is_empty());
        assert!(state.apply_filters);
    }

    #[test]
    fn non_artist_selection_is_last_write_wins() {
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::SelectOption(medium("Sculpture")),
            ],
        );
        assert_eq!(state.selected_filters, vec![medium("Sculpture")]);

        let state = reduce(state, FilterAction::Commit);
        assert_eq!(state.applied_filters, vec![medium("Sculpture")]);
    }

    #[test]
    fn newest_pick_goes_first() {
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::SelectOption(sort("-published_at")),
            ],
        );
        assert_eq!(state.selected_filters, vec![sort("-published_at"), medium("Painting")]);
    }

    #[test]
    fn selecting_a_default_without_applied_entry_is_dropped() {
        let state = reduce(FilterState::new(), FilterAction::SelectOption(medium("*")));
        assert!(state.selected_filters.is_empty());
    }

    #[test]
    fn selecting_the_default_replaces_a_pending_pick() {
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::SelectOption(medium("*")),
            ],
        );
        assert!(state.selected_filters.is_empty());
    }

    #[test]
    fn reselecting_an_applied_value_is_dropped() {
        let state = reduce(applied(vec![medium("Painting")]), FilterAction::SelectOption(medium("Painting")));
        assert!(state.selected_filters.is_empty());
    }

    #[test]
    fn selecting_default_over_applied_value_is_kept_and_clears_on_commit() {
        let state = run(
            applied(vec![medium("Painting")]),
            [FilterAction::SelectOption(medium("*")), FilterAction::Commit],
        );
        assert!(state.applied_filters.is_empty());
    }

    #[test]
    fn artists_toggle_by_id() {
        let a = FilterOption::artist("a", "A");
        let b = FilterOption::artist("b", "B");
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(a.clone()),
                FilterAction::SelectOption(b.clone()),
            ],
        );
        assert_eq!(state.selected_filters, vec![a.clone(), b.clone()]);

        let state = reduce(state, FilterAction::SelectOption(a));
        assert_eq!(state.selected_filters, vec![b]);
    }

    #[test]
    fn selecting_another_dimension_keeps_every_artist() {
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(FilterOption::artist("a", "A")),
                FilterAction::SelectOption(FilterOption::artist("b", "B")),
                FilterAction::SelectOption(medium("Painting")),
            ],
        );
        assert_eq!(state.selected_filters.len(), 3);
        assert_eq!(state.selected_filters[0], medium("Painting"));
    }

    #[test]
    fn reselecting_an_applied_artist_is_kept_as_pending_deselection() {
        let a = FilterOption::artist("a", "A");
        let state = reduce(applied(vec![a.clone()]), FilterAction::SelectOption(a.clone()));
        assert_eq!(state.selected_filters, vec![a]);

        let state = reduce(state, FilterAction::Commit);
        assert!(state.applied_filters.is_empty());
    }

    #[test]
    fn commit_merges_previously_applied_dimensions() {
        let state = run(
            applied(vec![sort("-published_at")]),
            [FilterAction::SelectOption(medium("Painting")), FilterAction::Commit],
        );
        assert_eq!(state.applied_filters, vec![medium("Painting"), sort("-published_at")]);
    }

    #[test]
    fn ways_to_buy_flags_accumulate_and_toggle_off() {
        let buy = FilterParamName::WAYS_TO_BUY_BUY;
        let bid = FilterParamName::WAYS_TO_BUY_BID;
        let state = run(
            FilterState::new(),
            [
                FilterAction::SelectOption(flag(buy.clone(), true)),
                FilterAction::SelectOption(flag(bid.clone(), true)),
                FilterAction::Commit,
            ],
        );
        assert_eq!(state.applied_filters, vec![flag(bid.clone(), true), flag(buy.clone(), true)]);

        let state = run(state, [FilterAction::SelectOption(flag(buy, false)), FilterAction::Commit]);
        assert_eq!(state.applied_filters, vec![flag(bid, true)]);
    }

    #[test]
    fn unknown_dimensions_are_never_dropped() {
        let edition = FilterOption::without_value(FilterParamName::Unknown("edition".into()), "Any");
        let state = run(
            FilterState::new(),
            [FilterAction::SelectOption(edition.clone()), FilterAction::Commit],
        );
        assert_eq!(state.applied_filters, vec![edition]);
    }

    #[test]
    fn clear_all_keeps_applied_filters() {
        let state = run(
            applied(vec![sort("price")]),
            [FilterAction::SelectOption(medium("Painting")), FilterAction::ClearAll],
        );
        assert_eq!(state.applied_filters, vec![sort("price")]);
        assert!(state.selected_filters.is_empty());
        assert!(state.previously_applied_filters.is_empty());
        assert!(!state.apply_filters);
    }

    #[test]
    fn reset_restores_the_committed_baseline() {
        let state = run(
            applied(vec![sort("price")]),
            [
                FilterAction::ClearAll,
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::Reset,
            ],
        );
        assert_eq!(state.previously_applied_filters, vec![sort("price")]);
        assert!(state.selected_filters.is_empty());
        assert!(!state.apply_filters);
    }

    #[test]
    fn zero_state_escape_commits_nothing() {
        let state = run(
            applied(vec![sort("price")]),
            [
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::ClearAllToEmptyResult,
            ],
        );
        assert_eq!(state, FilterState { apply_filters: true, ..FilterState::new() });
    }

    #[test]
    fn apply_flag_lasts_one_transition() {
        let bucket = Aggregation {
            slice: AggregationName::Medium,
            counts: vec![],
        };
        let state = run(
            FilterState::new(),
            [FilterAction::SelectOption(medium("Painting")), FilterAction::Commit],
        );
        assert!(state.apply_filters);

        let state = reduce(state, FilterAction::SetAggregations(vec![bucket.clone()]));
        assert!(!state.apply_filters);
        assert_eq!(state.aggregations, vec![bucket]);
        assert_eq!(state.applied_filters, vec![medium("Painting")]);
    }

    #[test]
    fn aggregations_mid_selection_keep_the_selection_round() {
        let bucket = Aggregation {
            slice: AggregationName::Medium,
            counts: vec![],
        };
        let state = run(
            applied(vec![sort("price")]),
            [FilterAction::SelectOption(medium("Painting"))],
        );

        let updated = reduce(state.clone(), FilterAction::SetAggregations(vec![bucket.clone()]));
        assert_eq!(updated.selected_filters, state.selected_filters);
        assert_eq!(updated.previously_applied_filters, state.previously_applied_filters);
        assert_eq!(updated.applied_filters, state.applied_filters);
        assert_eq!(updated.aggregations, vec![bucket]);

        let committed = reduce(updated, FilterAction::Commit);
        assert_eq!(committed.applied_filters, vec![medium("Painting"), sort("price")]);
    }

    #[test]
    fn aggregations_survive_every_other_action() {
        let bucket = Aggregation {
            slice: AggregationName::Color,
            counts: vec![],
        };
        let state = run(
            FilterState::new(),
            [
                FilterAction::SetAggregations(vec![bucket.clone()]),
                FilterAction::SelectOption(medium("Painting")),
                FilterAction::Commit,
                FilterAction::Reset,
                FilterAction::ClearAll,
                FilterAction::ClearAllToEmptyResult,
                FilterAction::SetInitialFilterState(vec![sort("price")]),
            ],
        );
        assert_eq!(state.aggregations, vec![bucket]);
    }

    #[test]
    fn initial_state_seeds_applied_and_base() {
        let state = applied(vec![medium("Painting")]);
        assert_eq!(state.applied_filters, vec![medium("Painting")]);
        assert_eq!(state.previously_applied_filters, vec![medium("Painting")]);
        assert!(!state.apply_filters);
    }
}
