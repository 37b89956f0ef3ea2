//! Shared test helpers for ptcgp_mcp tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use ptcgp_core::{CardTable, TokenSortScorer};
use rmcp::model::{CallToolResult, RawContent};
use tempfile::TempDir;

/// The scorer every fuzzy tool test uses.
pub const SCORER: TokenSortScorer = TokenSortScorer;

/// A small but representative dataset: duplicate names across cards,
/// two cards sharing identical ability wording, a passthrough column.
pub const SAMPLE_CSV: &str = "\
id,name,color,attack,ability,rarity
a1-001,Bulbasaur,Grass,\"[{\"\"name\"\":\"\"Vine Whip\"\",\"\"damage\"\":40}]\",,Common
a1-007,Butterfree,Grass,\"[{\"\"name\"\":\"\"Gust\"\",\"\"damage\"\":60}]\",\"[{\"\"name\"\":\"\"Powder Heal\"\",\"\"info\"\":\"\"Heal 20 damage from each of your Pokemon.\"\"}]\",Rare
a1-094,Pikachu,Lightning,\"[{\"\"name\"\":\"\"Gnaw\"\",\"\"damage\"\":10}]\",,Common
pa-001,Pikachu,Lightning,\"[{\"\"name\"\":\"\"Circle Circuit\"\",\"\"damage\"\":30}]\",,Promo
a1-177,Weezing,Darkness,\"[{\"\"name\"\":\"\"Tackle\"\",\"\"damage\"\":30}]\",\"[{\"\"name\"\":\"\"Gas Leak\"\",\"\"info\"\":\"\"Poison the opposing Active Pokemon.\"\"}]\",Rare
a2-098,Shaymin,Grass,\"[{\"\"name\"\":\"\"Flop\"\",\"\"damage\"\":10}]\",\"[{\"\"name\"\":\"\"Fragrant Flower Garden\"\",\"\"info\"\":\"\"Heal 20 damage from each of your Pokemon.\"\"}]\",Rare
";

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the text content of a CallToolResult as JSON.
pub fn get_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::from_str(&get_text(result)).expect("Expected JSON content")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Write a dataset CSV into a temp dir.
///
/// Returns the TempDir (must be kept alive) and the dataset path.
pub fn create_dataset(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("cards.csv");
    fs::write(&path, contents).expect("Failed to write dataset");
    (dir, path)
}

/// Load the sample dataset into a card table.
pub fn sample_table() -> CardTable {
    let (_dir, path) = create_dataset(SAMPLE_CSV);
    CardTable::load(&path).expect("Failed to load sample dataset")
}
