// Building blocks used by the commands.

// Discovery and selection of installed IDE config directories.
pub mod ide_installations;
// `--version` probing of interpreters.
pub mod interpreter_inspector;
// `./venv` / `./.venv` guessing.
pub mod interpreter_locator;
// Streaming edit of `jdk.table.xml`.
pub mod jdk_table;
// Default JetBrains config root per OS.
pub mod paths;
pub mod prompts;
pub mod utilities;
