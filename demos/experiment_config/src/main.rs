//! Experiment configuration demo entry-point: parse the command line,
//! dispatch to a subcommand, report the outcome.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use experiment_config::cli::{CommandLine, Commands};
use experiment_config::commands;
use experiment_config::error::Result;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = CommandLine::parse();
    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Show(args) => commands::show(&args.path, &mut stdout)?,
        Commands::Inherit(args) => {
            commands::inherit(&args)?;
            writeln!(stdout, "{}", args.out)?;
        }
        Commands::Snapshot(args) => {
            let path = commands::snapshot(&args)?;
            writeln!(stdout, "{path}")?;
        }
    }
    Ok(())
}
