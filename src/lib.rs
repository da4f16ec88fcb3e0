//! Artwork filters: applied-filter reconciliation for artwork browsing screens.
//!
//! Screens that list artworks (fairs, shows, sales, artist pages) let users
//! narrow results through a filter sheet. This crate owns the state behind
//! that sheet:
//! - Tentative picks made while the sheet is open
//! - The committed filter set that drives the artwork query
//! - Reconciliation between the two on commit, with default suppression and
//!   multi-select artist handling
//! - Derived views: "currently checked" options and query parameters
//! - A replay driver for recorded action scripts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Replay CLI (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Actions and state                                │
//! │  - Reconciliation helpers                           │
//! │  - Display view, query params, store                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Options, dimensions, defaults, aggregations      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, OTLP file export             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Filter state, actions, reducer, and derived views
//! - [`domain`]: Core value types, defaults, and errors
//! - [`infrastructure`]: Data directory and path helpers
//! - [`replay`]: Action script parsing and replay
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! ```toml
//! trace_level = "debug"
//! trace_file = "default"  # or a path such as "~/traces/otlp.json"
//!
//! [[initial_filters]]
//! paramName = "medium"
//! paramValue = "Painting"
//! displayText = "Painting"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use artwork_filters::{initialize, Config, FilterAction, FilterOption, FilterParamName};
//!
//! let mut store = initialize(&Config::default());
//!
//! store.dispatch(FilterAction::SelectOption(FilterOption::artist("banksy", "Banksy")));
//! store.dispatch(FilterAction::SelectOption(FilterOption::artist("kaws", "KAWS")));
//! let state = store.dispatch(FilterAction::Commit);
//!
//! assert_eq!(state.applied_filters.len(), 2);
//! assert_eq!(store.request_params().artist_ids, ["banksy", "kaws"]);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod replay;

pub use app::{reduce, selected_options_union, FilterAction, FilterParams, FilterState, FilterStore};
pub use domain::{
    Aggregation, AggregationCount, AggregationName, FilterArray, FilterError, FilterOption, FilterParamName,
    ParamValue, Result,
};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter, e.g. `"debug"` or `"artwork_filters=trace"`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Where to export spans as OTLP JSON. Export is off when unset.
    ///
    /// The value `"default"` selects
    /// [`default_trace_file`](infrastructure::default_trace_file).
    pub trace_file: Option<PathBuf>,

    /// Filters to seed the store with, e.g. from a deep link.
    pub initial_filters: Vec<FilterOption>,
}

impl Config {
    /// Parses configuration from a host-provided key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: String → `Option<String>`
    /// - `trace_file`: String → `Option<PathBuf>` with `~` expanded, or the
    ///   default trace file for `"default"`
    /// - `initial_filters`: JSON array of options; unparsable JSON is logged
    ///   and ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use artwork_filters::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert(
    ///     "initial_filters".to_string(),
    ///     r#"[{"paramName":"sort","paramValue":"-published_at","displayText":"Recently added"}]"#.to_string(),
    /// );
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert_eq!(config.initial_filters.len(), 1);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let initial_filters = map
            .get("initial_filters")
            .and_then(|raw| {
                serde_json::from_str::<Vec<FilterOption>>(raw)
                    .map_err(|e| tracing::debug!(error = %e, "ignoring unparsable initial_filters"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(|path| resolve_trace_file(path)),
            initial_filters,
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Toml`] for malformed TOML or mistyped keys, and
    /// [`FilterError::Config`] for a blank `trace_level`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        if config.trace_level.as_deref().is_some_and(|level| level.trim().is_empty()) {
            return Err(FilterError::Config("trace_level must not be blank".to_string()));
        }
        let resolved = config
            .trace_file
            .as_deref()
            .and_then(Path::to_str)
            .map(resolve_trace_file);
        if resolved.is_some() {
            config.trace_file = resolved;
        }
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] if the file cannot be read, or the errors
    /// of [`Config::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading config file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn resolve_trace_file(raw: &str) -> PathBuf {
    if raw == "default" {
        infrastructure::default_trace_file()
    } else {
        infrastructure::expand_tilde(raw)
    }
}

/// Creates a filter store for a new screen.
///
/// When the config carries initial filters, they are applied through
/// [`FilterAction::SetInitialFilterState`] so they become both the applied
/// set and the reconciliation base.
///
/// # Example
///
/// ```rust
/// use artwork_filters::{initialize, Config, FilterOption, FilterParamName};
///
/// let config = Config {
///     initial_filters: vec![FilterOption::new(FilterParamName::Medium, "Painting", "Painting")],
///     ..Default::default()
/// };
///
/// let store = initialize(&config);
/// assert_eq!(store.state().applied_filters.len(), 1);
/// assert!(!store.state().apply_filters);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> FilterStore {
    tracing::debug!(initial_filters = config.initial_filters.len(), "initializing filter store");

    let mut store = FilterStore::new();
    if !config.initial_filters.is_empty() {
        store.dispatch(FilterAction::SetInitialFilterState(config.initial_filters.clone()));
    }
    store
}
