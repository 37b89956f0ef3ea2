//! Ability-search command implementation.

use std::path::Path;

use ptcgp_core::{TokenSortScorer, query};

use super::load_table;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Fuzzy-searches cards by ability text.
pub fn search_ability(dataset: &Path, ability: &str, format: OutputFormat) -> Result<(), CliError> {
    ui::header("Searching cards by ability text");
    let table = load_table(dataset)?;

    match query::fuzzy_search_ability(&table, &TokenSortScorer, ability) {
        Ok(cards) => {
            match format {
                OutputFormat::Pretty => {
                    ui::success(&format!("Found {} card(s) with a matching ability", cards.len()));
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
