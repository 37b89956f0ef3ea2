//! Name-search command implementation.

use std::path::Path;

use ptcgp_core::{TokenSortScorer, query};

use super::load_table;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Fuzzy-searches cards by Pokémon name.
pub fn search_pokemon(dataset: &Path, name: &str, format: OutputFormat) -> Result<(), CliError> {
    ui::header("Searching cards by name");
    let table = load_table(dataset)?;

    match query::fuzzy_search_pokemon(&table, &TokenSortScorer, name) {
        Ok(cards) => {
            match format {
                OutputFormat::Pretty => {
                    ui::success(&format!("Found {} card(s) matching '{}'", cards.len(), name));
                    ui::pretty_cards(&cards);
                }
                OutputFormat::Json => ui::json_output(&cards),
            }
            Ok(())
        }
        Err(err) => {
            ui::error(err.message());
            Err(CliError::QueryError)
        }
    }
}
