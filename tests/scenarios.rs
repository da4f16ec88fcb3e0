//! End-to-end filter sheet scenarios.

use artwork_filters::{reduce, FilterAction, FilterOption, FilterParamName, FilterState, FilterStore};

fn medium(value: &str) -> FilterOption {
    FilterOption::new(FilterParamName::Medium, value, value)
}

fn run(actions: impl IntoIterator<Item = FilterAction>) -> FilterState {
    actions.into_iter().fold(FilterState::new(), reduce)
}

#[test]
fn painting_select_and_commit() {
    let state = run([FilterAction::SelectOption(medium("Painting")), FilterAction::Commit]);

    assert_eq!(state.applied_filters, vec![medium("Painting")]);
    assert!(state.apply_filters);
    assert!(state.selected_filters.is_empty());
}

#[test]
fn clear_all_does_not_touch_applied_filters() {
    let sort = FilterOption::new(FilterParamName::Sort, "price", "Price");
    let state = run([
        FilterAction::SetInitialFilterState(vec![sort.clone()]),
        FilterAction::SelectOption(medium("Painting")),
    ]);
    assert_eq!(state.selected_filters, vec![medium("Painting")]);

    let state = reduce(state, FilterAction::ClearAll);
    assert_eq!(state.applied_filters, vec![sort]);
    assert!(state.selected_filters.is_empty());
}

#[test]
fn two_artists_are_both_applied() {
    let state = run([
        FilterAction::SelectOption(FilterOption::artist("A", "Artist A")),
        FilterAction::SelectOption(FilterOption::artist("B", "Artist B")),
        FilterAction::Commit,
    ]);

    assert_eq!(state.applied_filters.len(), 2);
    assert!(state
        .applied_filters
        .iter()
        .all(|o| o.param_name == FilterParamName::ARTIST));
}

#[test]
fn sheet_session_with_cancel_then_apply() {
    let mut store = FilterStore::new();
    let sort = FilterOption::new(FilterParamName::Sort, "-published_at", "Recently added");
    let bid = FilterOption::new(FilterParamName::WAYS_TO_BUY_BID, true, "Bid");

    // first round: apply a sort
    store.dispatch(FilterAction::SelectOption(sort.clone()));
    store.dispatch(FilterAction::Commit);
    assert_eq!(store.pending_fetch().map(|p| p.sort), Some("-published_at".to_string()));

    // second round: pick something, then close the sheet without applying
    store.dispatch(FilterAction::SelectOption(bid.clone()));
    store.dispatch(FilterAction::Reset);
    assert_eq!(store.state().applied_filters, vec![sort.clone()]);
    assert_eq!(store.state().previously_applied_filters, vec![sort.clone()]);
    assert!(store.pending_fetch().is_none());

    // third round: pick it again and apply
    store.dispatch(FilterAction::SelectOption(bid.clone()));
    store.dispatch(FilterAction::Commit);
    assert_eq!(store.state().applied_filters, vec![sort, bid]);
    assert!(store.request_params().at_auction);

    // zero results: escape hatch clears everything and refetches
    store.dispatch(FilterAction::ClearAllToEmptyResult);
    assert!(store.state().applied_filters.is_empty());
    assert_eq!(store.pending_fetch(), Some(Default::default()));
}

#[test]
fn malformed_payload_is_carried_not_dropped() {
    let action: FilterAction =
        serde_json::from_str(r#"{"type":"selectFilters","payload":{"paramValue":"mystery"}}"#).unwrap();
    let state = run([action, FilterAction::Commit]);

    assert_eq!(state.applied_filters.len(), 1);
    assert_eq!(state.applied_filters[0].param_name, FilterParamName::Unknown(String::new()));
}
