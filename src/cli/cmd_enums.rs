use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Defines the command-line interface (CLI) for 'jetsetter'.
#[derive(Parser, Debug)]
#[command(name = "jetsetter")]
#[command(about = "Register Python interpreters with your JetBrains IDE", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups. `interpreter add` and `add interpreter` do the same thing.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage python interpreters.
    Interpreter {
        #[command(subcommand)]
        action: InterpreterCommands,
    },
    /// Add new interpreters to your IDE.
    Add {
        #[command(subcommand)]
        target: AddCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum InterpreterCommands {
    /// Add a new python interpreter.
    Add(AddInterpreterArgs),
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add a new python interpreter.
    Interpreter(AddInterpreterArgs),
}

/// Options shared by both spellings of the add command.
#[derive(Args, Debug, Clone)]
pub struct AddInterpreterArgs {
    /// The path to the interpreter. Guessed from ./venv or ./.venv when omitted.
    pub interpreter_path: Option<PathBuf>,

    /// The name of the interpreter in your IDE.
    #[arg(long)]
    pub name: Option<String>,

    /// The version of the IDE you want to add the interpreter to (e.g. PyCharm2021.1).
    #[arg(long)]
    pub ide_version: Option<String>,

    /// Directory holding one config folder per IDE. Defaults to the JetBrains location for this OS.
    #[arg(long, env = "JETSETTER_CONFIG_DIRECTORY", value_name = "PATH")]
    pub config_directory: Option<PathBuf>,

    /// Create a backup of the config file before modifying (default).
    #[arg(long, overrides_with = "no_backup")]
    pub backup: bool,

    /// Do not back up the config file.
    #[arg(long, overrides_with = "backup")]
    pub no_backup: bool,

    /// Confirm before modifying the config file (default).
    #[arg(long, overrides_with = "no_confirm")]
    pub confirm: bool,

    /// Modify the config file without asking.
    #[arg(long, overrides_with = "confirm")]
    pub no_confirm: bool,
}

impl AddInterpreterArgs {
    /// `--backup` is the default; only `--no-backup` (when it came last) turns it off.
    pub fn backup_enabled(&self) -> bool {
        !self.no_backup
    }

    /// Same rule as [`Self::backup_enabled`] for `--confirm/--no-confirm`.
    pub fn confirm_enabled(&self) -> bool {
        !self.no_confirm
    }
}

impl Commands {
    /// Both command spellings carry the same arguments; this unwraps either one.
    pub fn into_add_interpreter(self) -> AddInterpreterArgs {
        match self {
            Commands::Interpreter {
                action: InterpreterCommands::Add(args),
            } => args,
            Commands::Add {
                target: AddCommands::Interpreter(args),
            } => args,
        }
    }
}
