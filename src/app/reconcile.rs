//! Keyed union helpers shared by the reducer and the display view.
//!
//! Every option is identified by its dimension, except artist selections,
//! which are identified by artist id so several can coexist. That rule lives
//! only in [`ReconciliationKey::of`].

use crate::domain::{FilterOption, FilterParamName, ParamValue};

/// Identity of an option for de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconciliationKey<'a> {
    /// One entry per dimension.
    Dimension(&'a FilterParamName),
    /// One entry per artist id.
    Artist(Option<&'a ParamValue>),
}

impl<'a> ReconciliationKey<'a> {
    /// Computes the key of an option.
    #[must_use]
    pub fn of(option: &'a FilterOption) -> Self {
        if option.is_artist() {
            Self::Artist(option.param_value.as_ref())
        } else {
            Self::Dimension(&option.param_name)
        }
    }
}

/// Ordered union of several lists where the first entry seen for a key wins.
///
/// Earlier lists take precedence over later ones, and entries keep the order
/// in which they were first encountered.
///
/// # Example
///
/// ```rust
/// use artwork_filters::app::reconcile::{union_by, ReconciliationKey};
/// use artwork_filters::{FilterOption, FilterParamName};
///
/// let selected = vec![FilterOption::new(FilterParamName::Medium, "Sculpture", "Sculpture")];
/// let applied = vec![
///     FilterOption::new(FilterParamName::Medium, "Painting", "Painting"),
///     FilterOption::new(FilterParamName::Sort, "-published_at", "Recently added"),
/// ];
///
/// let merged = union_by(&[selected.as_slice(), applied.as_slice()], ReconciliationKey::of);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].display_text, "Sculpture");
/// ```
pub fn union_by<'a, K, F>(lists: &[&'a [FilterOption]], key: F) -> Vec<FilterOption>
where
    K: PartialEq,
    F: Fn(&'a FilterOption) -> K,
{
    let mut seen: Vec<K> = Vec::new();
    let mut merged = Vec::new();

    for option in lists.iter().copied().flat_map(<[FilterOption]>::iter) {
        let option_key = key(option);
        if seen.contains(&option_key) {
            continue;
        }
        seen.push(option_key);
        merged.push(option.clone());
    }

    merged
}

/// Returns `true` for an artist that was previously applied and has been
/// selected again, which marks it for removal on the next commit.
///
/// The entry stays in the selection so counts stay correct, but it must not
/// be treated as checked or carried into the applied set.
#[must_use]
pub fn is_pending_deselection(
    option: &FilterOption,
    previously_applied: &[FilterOption],
    selected: &[FilterOption],
) -> bool {
    option.is_artist()
        && previously_applied.iter().any(|prev| prev.same_setting(option))
        && selected.iter().any(|sel| sel.same_setting(option))
}

/// Removes exact duplicates, keeping the first occurrence.
#[must_use]
pub fn dedup_exact(options: Vec<FilterOption>) -> Vec<FilterOption> {
    let mut unique: Vec<FilterOption> = Vec::with_capacity(options.len());
    for option in options {
        if !unique.contains(&option) {
            unique.push(option);
        }
    }
    unique
}
