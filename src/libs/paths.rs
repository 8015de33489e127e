// Resolution of the directory that holds one config folder per installed JetBrains IDE.

use crate::errors::{JetsetterError, Result};
use crate::libs::utilities::path_helpers::expand_tilde;
use crate::libs::utilities::platform::HostOs;
use crate::log_debug;
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Windows keeps per-user application data under this variable.
pub const APPDATA_VAR: &str = "APPDATA";

/// Computes the default JetBrains config root for `os`.
///
/// Pure: the caller supplies the home directory and the value of `APPDATA`,
/// so every branch can be exercised from any host.
///
/// # Errors
/// * `UnsupportedOs` for anything but macOS, Windows and Linux.
/// * `MissingEnvVar` on Windows when `APPDATA` is unset.
/// * `HomeDirUnavailable` on macOS/Linux without a home directory.
pub fn default_config_root(
    os: &HostOs,
    home: Option<&Path>,
    app_data: Option<OsString>,
) -> Result<PathBuf> {
    let root = match os {
        HostOs::MacOs => home
            .ok_or(JetsetterError::HomeDirUnavailable)?
            .join("Library")
            .join("Application Support")
            .join("JetBrains"),
        HostOs::Windows => {
            let app_data = app_data.ok_or(JetsetterError::MissingEnvVar(APPDATA_VAR))?;
            PathBuf::from(app_data).join("JetBrains")
        }
        HostOs::Linux => home
            .ok_or(JetsetterError::HomeDirUnavailable)?
            .join(".config")
            .join("JetBrains"),
        HostOs::Other(name) => return Err(JetsetterError::UnsupportedOs(name.clone())),
    };

    log_debug!(
        "[Paths] Default config root for {}: {}",
        os,
        root.display().to_string().cyan()
    );
    Ok(root)
}

/// Picks the config root for this run: the user's override if given, otherwise
/// the OS default. Called once at startup; the result is threaded through the command.
///
/// The OS default is always computed first, so an unsupported OS (or Windows
/// without `APPDATA`) stops the run even when an override is given.
///
/// The override is tilde-expanded but not checked for existence here; the add
/// command validates whichever root it ends up with.
pub fn resolve_config_root(
    override_dir: Option<&Path>,
    os: &HostOs,
    home: Option<&Path>,
    app_data: Option<OsString>,
) -> Result<PathBuf> {
    let default_root = default_config_root(os, home, app_data)?;
    match override_dir {
        Some(dir) => {
            let dir = expand_tilde(dir);
            log_debug!(
                "[Paths] Using config directory override: {}",
                dir.display().to_string().cyan()
            );
            Ok(dir)
        }
        None => Ok(default_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_root_lives_under_dot_config() {
        let root = default_config_root(&HostOs::Linux, Some(Path::new("/home/alice")), None)
            .expect("linux root");
        assert_eq!(root, PathBuf::from("/home/alice/.config/JetBrains"));
    }

    #[test]
    fn macos_root_lives_under_application_support() {
        let root = default_config_root(&HostOs::MacOs, Some(Path::new("/Users/alice")), None)
            .expect("macos root");
        assert_eq!(
            root,
            PathBuf::from("/Users/alice/Library/Application Support/JetBrains")
        );
    }

    #[test]
    fn windows_root_uses_appdata() {
        let root = default_config_root(
            &HostOs::Windows,
            None,
            Some(OsString::from("C:\\Users\\alice\\AppData\\Roaming")),
        )
        .expect("windows root");
        assert_eq!(
            root,
            PathBuf::from("C:\\Users\\alice\\AppData\\Roaming").join("JetBrains")
        );
    }

    #[test]
    fn windows_without_appdata_is_fatal() {
        let err = default_config_root(&HostOs::Windows, Some(Path::new("/home/alice")), None)
            .unwrap_err();
        assert!(matches!(err, JetsetterError::MissingEnvVar("APPDATA")));
    }

    #[test]
    fn unknown_os_is_fatal() {
        let err = default_config_root(
            &HostOs::Other("plan9".to_string()),
            Some(Path::new("/home/alice")),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, JetsetterError::UnsupportedOs(name) if name == "plan9"));
    }

    #[test]
    fn missing_home_is_fatal_on_linux() {
        let err = default_config_root(&HostOs::Linux, None, None).unwrap_err();
        assert!(matches!(err, JetsetterError::HomeDirUnavailable));
    }

    #[test]
    fn override_wins_over_default() {
        let root = resolve_config_root(
            Some(Path::new("/srv/jetbrains")),
            &HostOs::Linux,
            Some(Path::new("/home/alice")),
            None,
        )
        .expect("override root");
        assert_eq!(root, PathBuf::from("/srv/jetbrains"));
    }

    #[test]
    fn default_is_used_without_override() {
        let root = resolve_config_root(None, &HostOs::Linux, Some(Path::new("/home/alice")), None)
            .expect("default root");
        assert_eq!(root, PathBuf::from("/home/alice/.config/JetBrains"));
    }

    #[test]
    fn unsupported_os_is_fatal_even_with_override() {
        let err = resolve_config_root(
            Some(Path::new("/srv/jetbrains")),
            &HostOs::Other("plan9".to_string()),
            Some(Path::new("/home/alice")),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, JetsetterError::UnsupportedOs(name) if name == "plan9"));
    }

    #[test]
    fn windows_without_appdata_is_fatal_even_with_override() {
        let err = resolve_config_root(
            Some(Path::new("D:\\jetbrains")),
            &HostOs::Windows,
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, JetsetterError::MissingEnvVar("APPDATA")));
    }
}
