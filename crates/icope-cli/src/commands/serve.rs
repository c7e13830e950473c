//! Serve command - run the web collector and screening summary.

use colored::Colorize;

use crate::server::{app, state::AppState};

pub fn run(port: u16, no_open: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new();

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting collector at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("Answers live only for the current submission; use the");
    println!("download button (or GET /api/export) to keep a CSV copy.");
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port, verbose).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
