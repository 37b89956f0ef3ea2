use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::OutputFormat;

/// Defines the top-level interface for the ptcgp CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "ptcgp")]
#[command(version, about = "ptcgp CLI: Query the card database from the terminal.")]
pub struct PtcgpCli {
    /// Path to the card dataset CSV.
    #[arg(
        short,
        long,
        global = true,
        env = "PTCGP_DATASET",
        default_value = "cards_2025-03-26.csv"
    )]
    pub dataset: PathBuf,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: PtcgpCliCommand,
}

/// Defines the available subcommands of the ptcgp CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum PtcgpCliCommand {
    /// Get a card by exact ID.
    Get {
        /// Card ID (e.g. a1-001)
        card_id: String,
    },
    /// Fuzzy-search cards by Pokémon name.
    Search {
        /// Pokémon name; close misspellings are accepted
        name: String,
    },
    /// List all cards of a color.
    Color {
        /// Color name, case-insensitive (e.g. Grass)
        color: String,
    },
    /// Fuzzy-search cards by ability text.
    Ability {
        /// Ability description to search for
        query: String,
    },
    /// Start the MCP server on stdio.
    Mcp,
}
