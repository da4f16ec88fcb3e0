//! Derived "currently checked" view for the filter selection UI.

use super::reconcile::{is_pending_deselection, union_by, ReconciliationKey};
use crate::domain::{default_options, FilterArray, FilterOption};

/// Computes the options the selection UI should render as checked.
///
/// Selected options take precedence over previously applied ones, which take
/// precedence over each dimension's display default. Artists that are
/// pending de-selection are left out. The result is never written back into
/// the state.
///
/// # Example
///
/// ```rust
/// use artwork_filters::app::selected_options_union;
/// use artwork_filters::{FilterOption, FilterParamName};
///
/// let selected = vec![FilterOption::new(FilterParamName::Medium, "Painting", "Painting")];
/// let checked = selected_options_union(&selected, &[]);
///
/// let medium = checked
///     .iter()
///     .find(|o| o.param_name == FilterParamName::Medium)
///     .unwrap();
/// assert_eq!(medium.display_text, "Painting");
/// ```
#[must_use]
pub fn selected_options_union(selected: &[FilterOption], previously_applied: &[FilterOption]) -> FilterArray {
    let defaults = default_options();
    union_by(&[selected, previously_applied, defaults.as_slice()], ReconciliationKey::of)
        .into_iter()
        .filter(|option| !is_pending_deselection(option, previously_applied, selected))
        .collect()
}
