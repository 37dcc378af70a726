//! Command-line interface.

pub mod banner;
pub mod completions;
pub mod output;
pub mod setup;
pub mod status;

use clap::{Parser, Subcommand};

/// Bullpen - bootstrap wizard for local payments development.
#[derive(Parser)]
#[command(
    name = "bullpen",
    about = "Bootstrap a local Stripe + Postgres development environment",
    version,
    after_help = "Warm up. Take the mound. ⚾"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive setup wizard
    Setup {
        /// Skip ASCII art banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Show which managed keys are present in .env
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Setup { no_banner } => setup::execute(no_banner),
        Status { json } => status::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
