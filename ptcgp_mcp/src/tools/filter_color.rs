//! filter_by_color tool implementation.

use ptcgp_core::{CardTable, query};
use rmcp::model::CallToolResult;
use rmcp::schemars;

/// Parameters for the filter_by_color tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterByColorParams {
    /// Card color to filter by, case-insensitive (e.g. "Grass").
    pub color: String,
}

/// Execute the filter_by_color tool.
///
/// Returns every card of the given color, or a 404 error payload when
/// no card matches.
pub fn execute(table: &CardTable, params: &FilterByColorParams) -> CallToolResult {
    match query::filter_by_color(table, &params.color) {
        Ok(cards) => super::cards_result(&cards),
        Err(err) => super::error_result(&err),
    }
}
