//! Color-filter command implementation.

use std::path::Path;

use ptcgp_core::query;

use super::load_table;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists every card of the given color.
pub fn filter_color(dataset: &Path, color: &str, format: OutputFormat) -> Result<(), CliError> {
    ui::header("Filtering cards by color");
    let table = load_table(dataset)?;

    match query::filter_by_color(&table, color) {
        Ok(cards) => {
            match format {
                OutputFormat::Pretty => {
                    ui::success(&format!("Found {} '{}' card(s)", cards.len(), color));
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
