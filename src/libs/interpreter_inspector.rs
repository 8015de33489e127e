// Asks an interpreter what version it is.

use crate::errors::{JetsetterError, Result};
use crate::{log_debug, log_error};
use colored::Colorize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can report an interpreter's version string.
///
/// The add command only talks to this trait, so tests can swap in a fixed answer.
pub trait VersionQuery {
    /// Reports the version of `interpreter`, a path as the user typed it.
    /// Relative paths are resolved against `cwd`.
    fn version(&self, interpreter: &Path, cwd: &Path) -> Result<String>;
}

/// Runs `<interpreter> --version` and returns its trimmed stdout.
pub struct ProcessVersionQuery;

impl VersionQuery for ProcessVersionQuery {
    fn version(&self, interpreter: &Path, cwd: &Path) -> Result<String> {
        get_python_version(interpreter, cwd)
    }
}

/// Runs `<interpreter> --version` and returns what it printed on stdout, trimmed.
///
/// The output is not parsed: `"Python 3.8.8"` is returned as `"Python 3.8.8"`.
///
/// # Errors
/// `InvalidInterpreter` if the process cannot be started or exits non-zero.
/// The error names `interpreter` as given, not the resolved path.
pub fn get_python_version(interpreter: &Path, cwd: &Path) -> Result<String> {
    // `join` keeps an absolute `interpreter` as is.
    let absolute = cwd.join(interpreter);
    log_debug!(
        "[Inspector] Running {} --version",
        absolute.display().to_string().cyan()
    );

    let output = Command::new(&absolute)
        .arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            log_debug!("[Inspector] Could not start {}: {}", absolute.display(), e);
            JetsetterError::InvalidInterpreter {
                path: interpreter.to_path_buf(),
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            log_error!("[Inspector] {}", stderr.trim().red());
        }
        return Err(JetsetterError::InvalidInterpreter {
            path: interpreter.to_path_buf(),
        });
    }

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    log_debug!("[Inspector] Reported version: '{}'", version);
    Ok(version)
}
