//! # DirTree Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `dirtree` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Print the tree of the current directory
//! dirtree scan
//!
//! # Print and save the tree of ~/code/demo, with debug logs on stderr
//! dirtree -vv save ~/code/demo --output demo-tree.txt
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // `scan` and `save` handlers
mod common; // Shared filesystem output helpers
mod core; // Configuration and error types
mod render; // Directory tree rendering

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dirtree",
    about = "Render a directory as an ASCII tree",
    long_about = "Render a directory's contents as a classic `tree`-style listing.\n\
                  Directories come before files at every level, each group sorted by name.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Print the tree of a directory.
    #[command(alias = "s")]
    Scan(commands::scan::ScanArgs),
    /// Print the tree of a directory and save it to a text file.
    Save(commands::save::SaveArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Scan(args) => commands::scan::handle_scan(args).await,
        Commands::Save(args) => commands::save::handle_save(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
