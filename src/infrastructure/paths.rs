//! Filesystem locations for trace output and config files.

use std::path::PathBuf;

const APP_DIR: &str = "artwork-filters";

/// Returns the user's home directory from `$HOME`, if set.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Returns the data directory for trace files.
///
/// Uses `$XDG_DATA_HOME/artwork-filters` when set, otherwise
/// `~/.local/share/artwork-filters`, falling back to a relative
/// `.artwork-filters` directory when no home is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|dir| !dir.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    home_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Returns the default OTLP trace file path inside [`data_dir`].
#[must_use]
pub fn default_trace_file() -> PathBuf {
    data_dir().join("artwork-filters-otlp.json")
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use artwork_filters::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(default_trace_file().parent(), Some(data_dir().as_path()));
    }

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_tilde("relative/trace.json"), PathBuf::from("relative/trace.json"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }
}
