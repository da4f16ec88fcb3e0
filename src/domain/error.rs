//! Error types for the artwork filter engine.
//!
//! The reducer itself never fails. [`FilterError`] covers the fallible edges
//! around it: configuration files, action scripts, and trace file output.
//! All variants are implemented with the `thiserror` crate.

use thiserror::Error;

/// The main error type for operations around the filter engine.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use artwork_filters::FilterError;
///
/// fn validate_level(level: &str) -> Result<(), FilterError> {
///     if level.is_empty() {
///         return Err(FilterError::Config("trace_level must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_level("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum FilterError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised while reading config files or action scripts.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON payload could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A line of an action script is not a valid action.
    ///
    /// `line` is 1-based so it can be reported to the user as-is.
    #[error("invalid action on line {line}: {source}")]
    Script {
        /// Line number within the script.
        line: usize,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for artwork filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
