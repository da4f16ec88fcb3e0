//! Domain layer for the artwork filter engine.
//!
//! Core value types, the defaults table, and errors. Nothing here depends on
//! the reducer or on any runtime concern.
//!
//! # Organization
//!
//! - [`option`]: Dimensions, values, and candidate filter options
//! - [`defaults`]: Per-dimension default values and display defaults
//! - [`aggregation`]: Facet-count buckets
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use artwork_filters::domain::{is_default, FilterOption, FilterParamName};
//!
//! let all = FilterOption::new(FilterParamName::Medium, "*", "All");
//! assert!(is_default(&all.param_name, all.param_value.as_ref()));
//! ```

pub mod aggregation;
pub mod defaults;
pub mod error;
pub mod option;

pub use aggregation::{Aggregation, AggregationCount, AggregationName, Aggregations};
pub use defaults::{default_options, default_value, is_default, is_default_option, DefaultValue};
pub use error::{FilterError, Result};
pub use option::{FilterArray, FilterOption, FilterParamName, ParamValue};
