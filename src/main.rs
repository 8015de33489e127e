use clap::Parser;
use jetsetter::cli::cmd_enums::Cli;
use jetsetter::commands::interpreter::{self, AddInterpreterRequest, HostContext};
use jetsetter::errors::Result;
use jetsetter::libs::paths::{APPDATA_VAR, resolve_config_root};
use jetsetter::{log_error, logger};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    if let Err(err) = run(cli) {
        log_error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let host = HostContext::detect()?;
    let args = cli.command.into_add_interpreter();

    // Resolved once here and passed down; nothing below reads OS globals for it.
    let config_root = resolve_config_root(
        args.config_directory.as_deref(),
        &host.os,
        host.home.as_deref(),
        std::env::var_os(APPDATA_VAR),
    )?;

    let (backup, confirm) = (args.backup_enabled(), args.confirm_enabled());
    let request = AddInterpreterRequest {
        interpreter_path: args.interpreter_path,
        name: args.name,
        ide_version: args.ide_version,
        config_root,
        backup,
        confirm,
    };
    interpreter::run(request, &host)
}
