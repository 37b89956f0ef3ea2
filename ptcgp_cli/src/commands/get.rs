//! Get-card command implementation.

use std::path::Path;

use ptcgp_core::query;

use super::load_table;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Gets a single card by exact ID.
pub fn get_card(dataset: &Path, card_id: &str, format: OutputFormat) -> Result<(), CliError> {
    ui::header("Getting card by ID");
    let table = load_table(dataset)?;

    match query::get_card_data(&table, card_id) {
        Ok(card) => {
            match format {
                OutputFormat::Pretty => {
                    ui::success(&format!("Found card '{}'", card_id));
                    ui::pretty_card(card);
                }
                OutputFormat::Json => ui::json_output(card),
            }
            Ok(())
        }
        Err(err) => {
            ui::error(err.message());
            Err(CliError::QueryError)
        }
    }
}
