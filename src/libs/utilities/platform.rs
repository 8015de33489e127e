// Host operating system detection.
// Detection happens once, in `main`; everything downstream takes a `HostOs` value
// so the OS-dependent branches stay testable on any machine.

use crate::log_warn;
use colored::Colorize;
use std::fmt;

/// The operating systems `jetsetter` knows the JetBrains layout for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Windows,
    Linux,
    /// Anything else, carrying the raw name for error messages.
    Other(String),
}

impl HostOs {
    /// Detects the OS this binary was compiled for.
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Normalizes an OS name ("macos", "Darwin", "win32", ...) into a `HostOs`.
    pub fn from_name(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" | "apple-darwin" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            "windows" | "win32" | "win64" => HostOs::Windows,
            other => {
                log_warn!("[Platform] Unknown OS variant '{}'", other.purple());
                HostOs::Other(other.to_string())
            }
        }
    }

    /// Path of the interpreter executable inside a virtual environment directory.
    pub fn venv_interpreter(&self) -> &'static [&'static str] {
        match self {
            HostOs::Windows => &["Scripts", "python.exe"],
            _ => &["bin", "python"],
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::MacOs => write!(f, "macos"),
            HostOs::Windows => write!(f, "windows"),
            HostOs::Linux => write!(f, "linux"),
            HostOs::Other(name) => write!(f, "{name}"),
        }
    }
}
