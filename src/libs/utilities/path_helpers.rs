// Small path utilities shared by the resolver and the add command.

use crate::log_debug;
use std::path::{Path, PathBuf};

/// Token JetBrains IDEs understand as "the current user's home directory".
pub const USER_HOME_PLACEHOLDER: &str = "$USER_HOME$";

/// Expands a leading `~` into the user's home directory.
///
/// Paths that do not start with `~`, or whose home cannot be determined,
/// come back unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) if raw.starts_with('~') => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        _ => path.to_path_buf(),
    }
}

/// Replaces every occurrence of `home` inside `path` with `$USER_HOME$`.
///
/// The IDE stores interpreter paths this way so the same config works for
/// another account on another machine. With no known home, the path is kept as is.
pub fn substitute_home_placeholder(path: &Path, home: Option<&Path>) -> String {
    let raw = path.to_string_lossy().into_owned();
    let Some(home) = home else {
        return raw;
    };
    let home = home.to_string_lossy();
    if home.is_empty() {
        return raw;
    }
    let substituted = raw.replace(home.as_ref(), USER_HOME_PLACEHOLDER);
    log_debug!("[Paths] '{}' stored as '{}'", raw, substituted);
    substituted
}
