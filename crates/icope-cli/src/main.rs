//! icope CLI - ICOPE elder-care screening assessments.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, no_open } => commands::serve::run(port, no_open, cli.verbose),

        Commands::Evaluate { file, json } => commands::evaluate::run(file, json, cli.verbose),

        Commands::Export { file, output } => commands::export::run(file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
