// filesamples-cli/src/main.rs
//
// Entry point for the filesamples command-line tool.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up logging to the console (and optionally a file).
// - Dispatching to the collect and probe commands.
// - Managing process exit codes based on success or failure.

use clap::Parser;
use filesamples_cli::logging::{get_timestamp, init_logging};
use filesamples_cli::{Cli, Commands, run_collect, run_probe};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Collect(args) => {
            log::info!("filesamples collect started: {}", get_timestamp());
            run_collect(args, cli.ffprobe).map(|_| ())
        }
        Commands::Probe(args) => run_probe(&args, cli.ffprobe).map(|json| println!("{json}")),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
