//! TierBank CLI - Main entry point
//!
//! A thin external caller: it builds accounts and requests, submits them to
//! the approval chain, and displays verdicts and balance events. No core
//! logic lives here.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tierbank")]
#[command(about = "TierBank - tiered-authorization ledger", long_about = None)]
struct Cli {
    /// Tier table as JSON ({"tiers":[{"name":..,"ceiling":..}, ..]});
    /// defaults to Teller/Assistant Manager/Manager/Director
    #[arg(short, long)]
    tiers: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the branch-office demo scenario through the chain
    Demo,

    /// Print the approval bands of the configured chain
    Bands,
}

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let chain = commands::load_chain(cli.tiers.as_deref())?;

    match cli.command {
        Commands::Demo => commands::demo(&chain)?,
        Commands::Bands => commands::bands(&chain),
    }

    Ok(())
}
