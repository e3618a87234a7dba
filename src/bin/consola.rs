// src/bin/consola.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use consola::{
    cli::{Cli, Session, dispatcher},
    constants::{EXIT_FAILURE, EXIT_USAGE},
    input::InputError,
    t,
};

/// Sets up logging, runs the command and maps errors to exit codes.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // A malformed command line is a usage error, not a runtime failure.
        if let Some(InputError::OptionBeforeCommand { option }) = e.downcast_ref::<InputError>() {
            eprintln!("{}: {}", "Error".red().bold(), e);
            eprintln!("{}", format!(t!("cli.error.option_hint"), option = option).dimmed());
            std::process::exit(EXIT_USAGE);
        }

        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args collected: {:?}", cli);
    let session = Session::from_args(&cli.args)?;
    dispatcher::dispatch(&session)
}
