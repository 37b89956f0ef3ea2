mod ability;
mod color;
mod get;
mod mcp;
mod search;

use std::path::Path;

use ptcgp_core::{CardTable, DatasetError};

use crate::errors::CliError;
use crate::ui;

pub use ability::search_ability;
pub use color::filter_color;
pub use get::get_card;
pub use mcp::serve_mcp;
pub use search::search_pokemon;

/// Loads the card table for a one-shot command, reporting dataset
/// failures on stderr.
fn load_table(dataset: &Path) -> Result<CardTable, CliError> {
    CardTable::load(dataset).map_err(|err: DatasetError| {
        ui::error_with_details("Failed to load card database", &err.to_string());
        CliError::DatasetError
    })
}
