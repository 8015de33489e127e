//! Every way an `interpreter add` run can fail.
//!
//! All variants are fatal: the binary prints the message and exits with
//! status 1. Nothing here is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JetsetterError {
    // --- environment ---
    #[error("Unsupported OS '{0}'. Exiting")]
    UnsupportedOs(String),

    #[error("{0} environment variable not found.")]
    MissingEnvVar(&'static str),

    #[error("Could not determine the home directory of the current user.")]
    HomeDirUnavailable,

    #[error("Config directory {} not found. Exiting.", .0.display())]
    ConfigDirectoryNotFound(PathBuf),

    #[error("IDE {ide_version} config not found. Try running {ide_version} first. Exiting.")]
    ConfigFileNotFound { ide_version: String },

    // --- input resolution ---
    #[error("No interpreter path provided. Exiting.")]
    NoInterpreterPath,

    #[error("No IDE version provided. Exiting.")]
    NoIdeVersion,

    // --- validation ---
    #[error("No component found in the XML file {}", .0.display())]
    MissingComponent(PathBuf),

    #[error("Failed to parse {}: {reason}", .path.display())]
    MalformedXml { path: PathBuf, reason: String },

    // --- execution ---
    #[error("{} is not a valid python interpreter. Exiting...", .path.display())]
    InvalidInterpreter { path: PathBuf },

    // --- user ---
    #[error("Aborted!")]
    Aborted,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl JetsetterError {
    /// Wraps an I/O error with a short description of what was being attempted.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        JetsetterError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JetsetterError>;
