// The interpreter entry we add to an IDE's `jdk.table.xml`.

/// SDK kind JetBrains IDEs use for Python interpreters.
pub const PYTHON_SDK_TYPE: &str = "Python SDK";

/// One interpreter, as it will be written into the interpreter table.
///
/// Each field becomes `<field value="..."/>` under the new `jdk` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterRecord {
    /// Label shown in the IDE's interpreter list.
    pub name: String,
    /// Whatever the interpreter printed for `--version`.
    pub version: String,
    /// Absolute interpreter path, home directory replaced by `$USER_HOME$`.
    pub home_path: String,
    /// SDK kind the IDE dispatches on; always [`PYTHON_SDK_TYPE`] for records built here.
    pub sdk_type: String,
}

impl InterpreterRecord {
    /// A record of the Python SDK kind.
    pub fn python(name: String, version: String, home_path: String) -> Self {
        Self {
            name,
            version,
            home_path,
            sdk_type: PYTHON_SDK_TYPE.to_string(),
        }
    }

    /// Label used when `--name` is not given: `(<project dir>) - <version>`.
    pub fn default_name(project_dir: &str, version: &str) -> String {
        format!("({project_dir}) - {version}")
    }

    /// The element name / value pairs in the order the IDE writes them.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("version", self.version.as_str()),
            ("homePath", self.home_path.as_str()),
            ("type", self.sdk_type.as_str()),
        ]
    }
}
