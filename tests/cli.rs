//! End-to-end runs of the `jetsetter` binary against a throwaway JetBrains config tree.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EMPTY_TABLE: &str = r#"<application>
  <component name="ProjectJdkTable">
  </component>
</application>
"#;

struct Sandbox {
    _dir: TempDir,
    root: PathBuf,
}

impl Sandbox {
    /// `<tmp>/home/project` with a stub `python`, and `<tmp>/JetBrains/PyCharm2021.1/options/jdk.table.xml`.
    fn new(table: &str) -> Self {
        let dir = TempDir::new().unwrap();
        // The binary sees canonical paths (macOS tmp dirs sit behind a symlink).
        let root = dir.path().canonicalize().unwrap();
        let project = root.join("home").join("project");
        fs::create_dir_all(&project).unwrap();

        let python = project.join("python");
        fs::write(&python, "#!/bin/sh\necho 3.8.8\n").unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let options = root.join("JetBrains").join("PyCharm2021.1").join("options");
        fs::create_dir_all(&options).unwrap();
        fs::write(options.join("jdk.table.xml"), table).unwrap();

        Self { _dir: dir, root }
    }

    fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    fn project(&self) -> PathBuf {
        self.home().join("project")
    }

    fn config_root(&self) -> PathBuf {
        self.root.join("JetBrains")
    }

    fn table(&self) -> PathBuf {
        self.config_root()
            .join("PyCharm2021.1")
            .join("options")
            .join("jdk.table.xml")
    }

    fn jetsetter(&self) -> Command {
        let mut cmd = Command::cargo_bin("jetsetter").unwrap();
        cmd.current_dir(self.project())
            .env("HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("JETSETTER_CONFIG_DIRECTORY");
        cmd
    }
}

fn value_of(document: &str, tag: &str) -> Option<String> {
    let marker = format!("<{tag} value=\"");
    let start = document.find(&marker)? + marker.len();
    let end = document[start..].find('"')?;
    Some(document[start..start + end].to_string())
}

fn config_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn interpreter_add_writes_a_single_entry() {
    let sandbox = Sandbox::new(EMPTY_TABLE);

    sandbox
        .jetsetter()
        .args(["interpreter", "add", "python", "--name", "test"])
        .args(["--config-directory", &config_arg(&sandbox.config_root())])
        .args(["--ide-version", "PyCharm2021.1", "--no-confirm"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Added python to PyCharm2021.1 as test"));

    let written = fs::read_to_string(sandbox.table()).unwrap();
    assert_eq!(written.matches("<jdk version=\"2\">").count(), 1);
    assert_eq!(value_of(&written, "name").as_deref(), Some("test"));
    assert_eq!(value_of(&written, "version").as_deref(), Some("3.8.8"));
    assert_eq!(
        value_of(&written, "homePath").as_deref(),
        Some("$USER_HOME$/project/python")
    );
    assert_eq!(value_of(&written, "type").as_deref(), Some("Python SDK"));
    assert!(written.contains("<roots/></jdk></component>"));

    let backup = sandbox.table().with_extension("bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), EMPTY_TABLE);
}

#[test]
fn add_interpreter_spelling_works_too() {
    let sandbox = Sandbox::new(EMPTY_TABLE);

    sandbox
        .jetsetter()
        .args(["add", "interpreter", "python", "--no-backup", "--no-confirm"])
        .args(["--ide-version", "PyCharm2021.1"])
        .env("JETSETTER_CONFIG_DIRECTORY", sandbox.config_root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Added python to PyCharm2021.1 as 3.8.8"));

    let written = fs::read_to_string(sandbox.table()).unwrap();
    assert_eq!(value_of(&written, "name").as_deref(), Some("(project) - 3.8.8"));
    assert!(!sandbox.table().with_extension("bak").exists());
}

#[test]
fn missing_config_directory_exits_with_one() {
    let sandbox = Sandbox::new(EMPTY_TABLE);
    let missing = sandbox.root.join("nowhere");

    sandbox
        .jetsetter()
        .args(["interpreter", "add", "python", "--ide-version", "PyCharm2021.1"])
        .args(["--config-directory", &config_arg(&missing), "--no-confirm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config directory"));
}

#[test]
fn unknown_ide_exits_with_one_and_suggests_running_it() {
    let sandbox = Sandbox::new(EMPTY_TABLE);

    sandbox
        .jetsetter()
        .args(["interpreter", "add", "python", "--ide-version", "PyCharm2030.1"])
        .args(["--config-directory", &config_arg(&sandbox.config_root()), "--no-confirm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Try running PyCharm2030.1 first"));
}

#[test]
fn failing_interpreter_exits_with_one() {
    let sandbox = Sandbox::new(EMPTY_TABLE);
    let broken = sandbox.project().join("broken-python");
    fs::write(&broken, "#!/bin/sh\nexit 1\n").unwrap();
    fs::set_permissions(&broken, fs::Permissions::from_mode(0o755)).unwrap();

    sandbox
        .jetsetter()
        .args(["interpreter", "add", "broken-python", "--ide-version", "PyCharm2021.1"])
        .args(["--config-directory", &config_arg(&sandbox.config_root()), "--no-confirm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid python interpreter"));

    assert_eq!(fs::read_to_string(sandbox.table()).unwrap(), EMPTY_TABLE);
}

#[test]
fn table_without_component_is_left_alone() {
    let broken = "<application><project/></application>";
    let sandbox = Sandbox::new(broken);

    sandbox
        .jetsetter()
        .args(["interpreter", "add", "python", "--ide-version", "PyCharm2021.1"])
        .args(["--config-directory", &config_arg(&sandbox.config_root()), "--no-confirm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No component found"));

    assert_eq!(fs::read_to_string(sandbox.table()).unwrap(), broken);
    assert!(!sandbox.table().with_extension("bak").exists());
}
