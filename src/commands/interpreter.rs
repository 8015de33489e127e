//! # `interpreter add`
//!
//! Registers a Python interpreter with a JetBrains IDE by appending an entry to
//! `<config root>/<IDE>/options/jdk.table.xml`.
//!
//! ## Flow
//!
//! 1. Resolve the interpreter path (argument, else a `./venv` or `./.venv` guess).
//! 2. Ask the interpreter for its version.
//! 3. Resolve the IDE (argument, else an interactive pick).
//! 4. Check the config root and the interpreter table exist.
//! 5. Build the new document in memory. A broken table stops the run here,
//!    before any file is touched.
//! 6. Back up the table to `jdk.table.bak` (unless `--no-backup`).
//! 7. Ask for confirmation (unless `--no-confirm`).
//! 8. Overwrite the table and report.
//!
//! Every failure is fatal and maps to exit status 1 in `main`.

use crate::errors::{JetsetterError, Result};
use crate::libs::ide_installations::select_ide;
use crate::libs::interpreter_inspector::{ProcessVersionQuery, VersionQuery};
use crate::libs::interpreter_locator::guess_interpreter_path;
use crate::libs::jdk_table::add_interpreter_to_table;
use crate::libs::prompts::{Prompter, TerminalPrompter};
use crate::libs::utilities::path_helpers::substitute_home_placeholder;
use crate::libs::utilities::platform::HostOs;
use crate::schemas::interpreter::InterpreterRecord;
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the interpreter table inside one IDE's config directory.
pub const JDK_TABLE_RELATIVE_PATH: [&str; 2] = ["options", "jdk.table.xml"];

/// Extension of the snapshot taken before the table is overwritten.
pub const BACKUP_EXTENSION: &str = "bak";

/// Everything the user asked for on the command line, with the config root already resolved.
#[derive(Debug, Clone)]
pub struct AddInterpreterRequest {
    /// Interpreter as typed on the command line. `None` means "look for a venv".
    pub interpreter_path: Option<PathBuf>,
    /// Label for the IDE's interpreter list. `None` means `(<cwd>) - <version>`.
    pub name: Option<String>,
    /// IDE config directory name, e.g. `PyCharm2021.1`. `None` means "ask".
    pub ide_version: Option<String>,
    /// Directory holding one config folder per IDE (override or OS default).
    pub config_root: PathBuf,
    /// Snapshot the table to `jdk.table.bak` before overwriting it.
    pub backup: bool,
    /// Ask before overwriting the table.
    pub confirm: bool,
}

/// Facts about the machine and process, captured once at startup.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Decides where a venv keeps its interpreter.
    pub os: HostOs,
    /// Where venvs are looked for, relative interpreter paths are resolved,
    /// and the default interpreter name comes from.
    pub cwd: PathBuf,
    /// Replaced by `$USER_HOME$` in the stored interpreter path.
    pub home: Option<PathBuf>,
}

impl HostContext {
    /// Captures the real process state. Only `main` calls this; tests build the struct by hand.
    pub fn detect() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| JetsetterError::io("Failed to determine the current directory", e))?;
        Ok(Self {
            os: HostOs::detect(),
            cwd,
            home: dirs::home_dir(),
        })
    }
}

/// What a successful run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The interpreter path as the user gave it (or as it was guessed).
    pub interpreter_path: PathBuf,
    pub ide_version: String,
    /// What was appended to the table.
    pub record: InterpreterRecord,
    /// `--name` if given, otherwise the bare version string.
    pub label: String,
    pub config_file: PathBuf,
    /// `None` when backups were turned off.
    pub backup_file: Option<PathBuf>,
}

/// Entry point used by `main`: real terminal prompts, real interpreter.
pub fn run(request: AddInterpreterRequest, host: &HostContext) -> Result<()> {
    let outcome = add_interpreter(&request, host, &TerminalPrompter::new(), &ProcessVersionQuery)?;
    log_info!(
        "Added {} to {} as {}",
        outcome.interpreter_path.display().to_string().green(),
        outcome.ide_version.cyan(),
        outcome.label.bold()
    );
    Ok(())
}

/// Runs the whole add flow against injected prompt and version capabilities.
pub fn add_interpreter(
    request: &AddInterpreterRequest,
    host: &HostContext,
    prompter: &dyn Prompter,
    versions: &dyn VersionQuery,
) -> Result<AddOutcome> {
    log_debug!("[Add] Request: {:?}", request);

    let interpreter_path = match &request.interpreter_path {
        Some(path) => path.clone(),
        None => guess_interpreter_path(&host.cwd, &host.os, prompter)?
            .ok_or(JetsetterError::NoInterpreterPath)?,
    };
    let absolute_interpreter = host.cwd.join(&interpreter_path);

    let version = versions.version(&interpreter_path, &host.cwd)?;

    let ide_version = match &request.ide_version {
        Some(ide) => ide.clone(),
        None => select_ide(&request.config_root, prompter)?.ok_or(JetsetterError::NoIdeVersion)?,
    };

    if !request.config_root.is_dir() {
        return Err(JetsetterError::ConfigDirectoryNotFound(
            request.config_root.clone(),
        ));
    }

    let config_file = jdk_table_path(&request.config_root, &ide_version);
    if !config_file.exists() {
        return Err(JetsetterError::ConfigFileNotFound { ide_version });
    }
    log_debug!(
        "[Add] Interpreter table: {}",
        config_file.display().to_string().cyan()
    );

    // Prompt and report use the bare version when no name was given,
    // even though the stored entry gets the longer default name.
    let label = request.name.clone().unwrap_or_else(|| version.clone());
    let record = build_record(request.name.as_deref(), version, &absolute_interpreter, host);

    // Built before anything on disk changes, so a broken table stops the run here.
    let new_document = add_interpreter_to_table(&config_file, &record)?;

    let backup_file = if request.backup {
        Some(backup_table(&config_file)?)
    } else {
        log_debug!("[Add] Backups disabled");
        None
    };

    if request.confirm {
        let question = format!(
            "Are you sure you want to add {} to {} as {}?",
            interpreter_path.display(),
            ide_version,
            label
        );
        if !prompter.confirm(&question, false)? {
            log_warn!("Nothing was written to {}", config_file.display());
            return Err(JetsetterError::Aborted);
        }
    }

    fs::write(&config_file, new_document)
        .map_err(|e| JetsetterError::io(format!("Failed to write {}", config_file.display()), e))?;

    Ok(AddOutcome {
        interpreter_path,
        ide_version,
        record,
        label,
        config_file,
        backup_file,
    })
}

/// `<config root>/<ide>/options/jdk.table.xml`
pub fn jdk_table_path(config_root: &Path, ide_version: &str) -> PathBuf {
    JDK_TABLE_RELATIVE_PATH
        .iter()
        .fold(config_root.join(ide_version), |path, part| path.join(part))
}

fn build_record(
    name: Option<&str>,
    version: String,
    absolute_interpreter: &Path,
    host: &HostContext,
) -> InterpreterRecord {
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let project_dir = host
                .cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            InterpreterRecord::default_name(&project_dir, &version)
        }
    };
    let home_path = substitute_home_placeholder(absolute_interpreter, host.home.as_deref());
    InterpreterRecord::python(name, version, home_path)
}

/// Replaces any previous snapshot with a copy of the table as it is right now.
fn backup_table(config_file: &Path) -> Result<PathBuf> {
    let backup_file = config_file.with_extension(BACKUP_EXTENSION);
    if backup_file.exists() {
        fs::remove_file(&backup_file).map_err(|e| {
            JetsetterError::io(format!("Failed to remove {}", backup_file.display()), e)
        })?;
    }
    fs::copy(config_file, &backup_file).map_err(|e| {
        JetsetterError::io(format!("Failed to back up to {}", backup_file.display()), e)
    })?;
    log_info!(
        "Backed up {} to {}",
        config_file.display(),
        backup_file.display().to_string().yellow()
    );
    Ok(backup_file)
}
