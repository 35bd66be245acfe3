//! Minibank CLI - interactive banking menu
//!
//! A text-menu shell over `minibank-core`: register, log in, open accounts,
//! deposit, withdraw, view statements, and accrue monthly interest. All
//! state lives in memory and is lost on exit.

use anyhow::Result;
use clap::Parser;
use minibank_core::AppState;
use tracing_subscriber::EnvFilter;

mod input;
mod menu;

/// Minibank - a single-process personal banking ledger
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug-level diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut app = AppState::new();
    menu::main_menu(&mut app)
}
