mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keygen_core::Catalog;

fn main() -> ExitCode {
    // Warnings (e.g. insecure entropy) go to stderr; RUST_LOG raises verbosity
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    let mut stdout = io::stdout().lock();
    match commands::dispatch(&cli.command, Catalog::standard(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
