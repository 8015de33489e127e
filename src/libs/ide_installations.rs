// Discovery of installed JetBrains IDEs under the config root.

use crate::errors::Result;
use crate::libs::prompts::Prompter;
use crate::{log_debug, log_warn};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Only products whose config directory starts with this prefix are offered.
pub const SUPPORTED_IDE_PREFIX: &str = "PyCharm";

/// Entries under the JetBrains root that are never IDE config directories.
const SKIP_LIST: [&str; 3] = [".DS_Store", "bl", "cl"];

/// Keeps the names of supported IDE config directories, sorted ascending.
pub fn filter_ide_entries<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ides: Vec<String> = names
        .into_iter()
        .map(Into::into)
        .filter(|name| !SKIP_LIST.contains(&name.as_str()))
        .filter(|name| name.starts_with(SUPPORTED_IDE_PREFIX))
        .collect();
    ides.sort();
    ides
}

/// Lists the supported IDE config directories directly under `config_root`.
///
/// A root that is missing or unreadable simply has no IDEs.
pub fn list_installed_ides(config_root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(config_root) {
        Ok(entries) => entries,
        Err(e) => {
            log_warn!(
                "[IDEs] Could not list {}: {}",
                config_root.display().to_string().yellow(),
                e
            );
            return Vec::new();
        }
    };

    let names = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned());
    let ides = filter_ide_entries(names);
    log_debug!("[IDEs] Found {} supported IDE(s): {:?}", ides.len(), ides);
    ides
}

/// Lets the user pick one of the installed IDEs.
///
/// # Returns
/// The chosen directory name, or `None` if there was nothing to choose or the user cancelled.
pub fn select_ide(config_root: &Path, prompter: &dyn Prompter) -> Result<Option<String>> {
    let ides = list_installed_ides(config_root);
    prompter.select("Select IDE", &ides)
}
