//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// icope: ICOPE elder-care screening assessments
#[derive(Parser)]
#[command(name = "icope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web collector form and screening summary
    Serve {
        /// Port for the web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Evaluate the screening rules against a saved answer file
    Evaluate {
        /// Path to the answers file (JSON object of label -> answer)
        #[arg(value_name = "ANSWERS")]
        file: PathBuf,

        /// Output the full summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a saved answer file as a spreadsheet-safe CSV
    Export {
        /// Path to the answers file (JSON object of label -> answer)
        #[arg(value_name = "ANSWERS")]
        file: PathBuf,

        /// Directory for the CSV (default: alongside the answers file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
