//! Core data structures and query operations for the ptcgp card database.
//!
//! This crate owns the CSV dataset loader, the in-memory card table,
//! the string-similarity scoring used for fuzzy lookups, and the four
//! read-only query operations. Transport concerns (MCP, CLI) live in
//! the sibling crates.

pub mod card;
pub mod dataset;
pub mod matching;
pub mod query;

pub use card::{Ability, AttackDef, Card};
pub use dataset::{CardTable, DatasetError};
pub use matching::{FUZZY_MATCH_THRESHOLD, SimilarityScorer, TokenSortScorer, extract_best};
pub use query::{
    QueryError, filter_by_color, fuzzy_search_ability, fuzzy_search_pokemon, get_card_data,
};
