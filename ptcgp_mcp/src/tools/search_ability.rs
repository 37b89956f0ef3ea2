//! fuzzy_search_ability tool implementation.

use ptcgp_core::{CardTable, SimilarityScorer, query};
use rmcp::model::CallToolResult;
use rmcp::schemars;

/// Parameters for the fuzzy_search_ability tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchAbilityParams {
    /// Ability description to search for.
    pub ability_query: String,
}

/// Execute the fuzzy_search_ability tool.
///
/// Returns every card owning an ability worded like the best match, or
/// a 404 error payload when nothing scores above the match threshold.
pub fn execute(
    table: &CardTable,
    scorer: &dyn SimilarityScorer,
    params: &SearchAbilityParams,
) -> CallToolResult {
    match query::fuzzy_search_ability(table, scorer, &params.ability_query) {
        Ok(cards) => super::cards_result(&cards),
        Err(err) => super::error_result(&err),
    }
}
