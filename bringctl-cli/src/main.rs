// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! bringctl CLI - Bring! shopping lists from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Show all lists with their pending items
//! bringctl lists
//!
//! # Show one list, including recently used items
//! bringctl lists --list Home --show-recently
//!
//! # Add an item with an amount
//! bringctl add Home Milk --specification 2
//!
//! # Mark an item purchased
//! bringctl purchase Home Milk
//! ```
//!
//! Credentials come from `--email`/`--password` or the `BRING_EMAIL` /
//! `BRING_PASSWORD` environment variables.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bringctl_client::{Config, Session};

use commands::{add, lists, purchase};

// ============================================================================
// CLI Definition
// ============================================================================

/// bringctl - Bring! shopping lists from the command line.
#[derive(Parser)]
#[command(name = "bringctl")]
#[command(about = "Bring! shopping lists from the command line")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Account email.
    #[arg(long, short, env = "BRING_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password.
    #[arg(long, short, env = "BRING_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show lists and their pending items.
    #[command(visible_alias = "l")]
    Lists(lists::ListsArgs),

    /// Add an item to a list.
    #[command(visible_alias = "a")]
    Add(add::AddArgs),

    /// Mark an item purchased.
    #[command(visible_alias = "p")]
    Purchase(purchase::PurchaseArgs),
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Missing credentials.
    MissingCredentials = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bringctl_client=debug,bringctl_core=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(ExitCode::Error as i32);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Credentials are checked before any network call.
    let (Some(email), Some(password)) = (&cli.email, &cli.password) else {
        Cli::command().print_help()?;
        std::process::exit(ExitCode::MissingCredentials as i32);
    };

    let session = Session::authenticate(Config::default(), email, password)?;

    match &cli.command {
        Commands::Lists(args) => lists::run(args, &session),
        Commands::Add(args) => add::run(args, &session),
        Commands::Purchase(args) => purchase::run(args, &session),
    }
}
