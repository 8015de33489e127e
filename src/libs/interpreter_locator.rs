// Guesses which interpreter the user wants when none was passed on the command line.

use crate::errors::Result;
use crate::libs::prompts::Prompter;
use crate::libs::utilities::platform::HostOs;
use crate::log_debug;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Virtual-environment directory names we look for, in order of preference.
pub const VENV_DIR_NAMES: [&str; 2] = ["venv", ".venv"];

/// Looks for `./venv`, then `./.venv`, under `cwd` and offers its interpreter.
///
/// Only the first directory that exists is offered. If the user declines it,
/// the next one is not tried.
///
/// # Returns
/// * `Ok(Some(path))` when the user accepted the candidate.
/// * `Ok(None)` when no virtual environment exists or the user declined.
pub fn guess_interpreter_path(
    cwd: &Path,
    os: &HostOs,
    prompter: &dyn Prompter,
) -> Result<Option<PathBuf>> {
    let Some(dir_name) = VENV_DIR_NAMES
        .iter()
        .find(|name| cwd.join(name).exists())
    else {
        log_debug!(
            "[Locator] No virtual environment found in {}",
            cwd.display().to_string().cyan()
        );
        return Ok(None);
    };

    let candidate = os
        .venv_interpreter()
        .iter()
        .fold(cwd.join(dir_name), |path, part| path.join(part));
    let question = format!(
        "Found `./{}`. Use `{}` as the interpreter?",
        dir_name,
        candidate.display()
    );

    if prompter.confirm(&question, true)? {
        Ok(Some(candidate))
    } else {
        log_debug!("[Locator] User declined {}", candidate.display());
        Ok(None)
    }
}
