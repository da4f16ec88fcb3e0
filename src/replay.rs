//! Replays action scripts through a [`FilterStore`].
//!
//! A script holds one JSON-encoded [`FilterAction`] per line. Blank lines
//! and lines starting with `#` are ignored, so scripts can be annotated:
//!
//! ```text
//! # pick two artists, then commit
//! {"type":"selectFilters","payload":{"paramName":"artistIDs","paramValue":"banksy","displayText":"Banksy"}}
//! {"type":"selectFilters","payload":{"paramName":"artistIDs","paramValue":"kaws","displayText":"KAWS"}}
//! {"type":"applyFilters"}
//! ```

use crate::app::{FilterAction, FilterState, FilterStore};
use crate::domain::{FilterError, Result};
use std::io::BufRead;

/// Parses an action script.
///
/// # Errors
///
/// Returns [`FilterError::Io`] if the reader fails and
/// [`FilterError::Script`] with the 1-based line number for a line that is
/// not a valid action.
///
/// # Example
///
/// ```rust
/// use artwork_filters::replay::parse_script;
/// use artwork_filters::FilterAction;
///
/// let script = "# reset first\n{\"type\":\"resetFilters\"}\n\n{\"type\":\"applyFilters\"}\n";
/// let actions = parse_script(script.as_bytes())?;
/// assert_eq!(actions, vec![FilterAction::Reset, FilterAction::Commit]);
/// # Ok::<(), artwork_filters::FilterError>(())
/// ```
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<FilterAction>> {
    let mut actions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = serde_json::from_str(trimmed).map_err(|source| FilterError::Script {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }

    tracing::debug!(actions = actions.len(), "parsed action script");
    Ok(actions)
}

/// Dispatches every action in order, returning the state after each one.
pub fn replay(store: &mut FilterStore, actions: Vec<FilterAction>) -> Vec<FilterState> {
    actions
        .into_iter()
        .map(|action| store.dispatch(action).clone())
        .collect()
}

/// Parses a script and replays it.
///
/// # Errors
///
/// Same as [`parse_script`]. No action is dispatched if any line is invalid.
pub fn run_script<R: BufRead>(store: &mut FilterStore, reader: R) -> Result<Vec<FilterState>> {
    let actions = parse_script(reader)?;
    Ok(replay(store, actions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_line_reports_its_number() {
        let script = "{\"type\":\"clearAll\"}\n# comment\n{\"type\":\"explode\"}\n";
        let err = parse_script(script.as_bytes()).unwrap_err();
        assert!(matches!(err, FilterError::Script { line: 3, .. }), "{err}");
    }

    #[test]
    fn nothing_is_dispatched_when_parsing_fails() {
        let mut store = FilterStore::new();
        let script = "{\"type\":\"applyFilters\"}\nnot json\n";
        assert!(run_script(&mut store, script.as_bytes()).is_err());
        assert_eq!(store.dispatched(), 0);
    }

    #[test]
    fn replay_records_every_intermediate_state() {
        let mut store = FilterStore::new();
        let states = replay(&mut store, vec![FilterAction::Commit, FilterAction::Reset]);
        assert_eq!(states.len(), 2);
        assert!(states[0].apply_filters);
        assert!(!states[1].apply_filters);
    }
}
