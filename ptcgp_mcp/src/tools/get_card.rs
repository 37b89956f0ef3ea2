//! get_card_data tool implementation.

use ptcgp_core::{CardTable, query};
use rmcp::model::CallToolResult;
use rmcp::schemars;

/// Parameters for the get_card_data tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetCardParams {
    /// Exact card ID (e.g. "a1-001").
    pub card_id: String,
}

/// Execute the get_card_data tool.
///
/// Returns the full record of the card with the given ID, or a 404
/// error payload when no card has that ID.
pub fn execute(table: &CardTable, params: &GetCardParams) -> CallToolResult {
    match query::get_card_data(table, &params.card_id) {
        Ok(card) => super::card_result(card),
        Err(err) => super::error_result(&err),
    }
}
