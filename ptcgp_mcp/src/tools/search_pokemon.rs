//! fuzzy_search_pokemon tool implementation.

use ptcgp_core::{CardTable, SimilarityScorer, query};
use rmcp::model::CallToolResult;
use rmcp::schemars;

/// Parameters for the fuzzy_search_pokemon tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchPokemonParams {
    /// Pokémon name to search for. Close misspellings are accepted.
    pub name: String,
}

/// Execute the fuzzy_search_pokemon tool.
///
/// Returns every card carrying the best-matching name, or a 404 error
/// payload when nothing scores above the match threshold.
pub fn execute(
    table: &CardTable,
    scorer: &dyn SimilarityScorer,
    params: &SearchPokemonParams,
) -> CallToolResult {
    match query::fuzzy_search_pokemon(table, scorer, &params.name) {
        Ok(cards) => super::cards_result(&cards),
        Err(err) => super::error_result(&err),
    }
}
