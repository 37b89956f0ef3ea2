//! MCP tool implementations for the card database.

pub mod filter_color;
pub mod get_card;
pub mod search_ability;
pub mod search_pokemon;

pub use filter_color::FilterByColorParams;
pub use get_card::GetCardParams;
pub use search_ability::SearchAbilityParams;
pub use search_pokemon::SearchPokemonParams;

use ptcgp_core::{Card, QueryError};
use rmcp::model::{CallToolResult, Content};

/// Render one matched card as pretty-printed JSON content.
fn card_result(card: &Card) -> CallToolResult {
    match serde_json::to_string_pretty(card) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => serialization_error(&err),
    }
}

/// Render a sequence of matched cards as pretty-printed JSON content.
fn cards_result(cards: &[&Card]) -> CallToolResult {
    match serde_json::to_string_pretty(cards) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => serialization_error(&err),
    }
}

/// Render a query failure as the tagged `{error, code}` payload, flagged
/// as a tool error so callers can distinguish outcomes structurally.
fn error_result(err: &QueryError) -> CallToolResult {
    let payload = serde_json::json!({
        "error": err.message(),
        "code": err.status_code(),
    });
    CallToolResult::error(vec![Content::text(payload.to_string())])
}

fn serialization_error(err: &serde_json::Error) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Failed to serialize result: {}",
        err
    ))])
}
