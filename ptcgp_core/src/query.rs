//! The four read-only query operations over a loaded card table.

use std::fmt;

use log::debug;

use crate::card::Card;
use crate::dataset::{CardTable, DatasetError};
use crate::matching::{FUZZY_MATCH_THRESHOLD, SimilarityScorer, extract_best};

/// A query that produced no usable result.
///
/// This is the structured replacement for an ad hoc `(payload, code)`
/// pair: callers match on the variant (or read `status_code`) instead of
/// inspecting result shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// No row matched, exactly or above the fuzzy threshold. Code 404.
    NotFound(String),
    /// The backing dataset could not be loaded. Code 500.
    DatasetUnavailable(String),
}

impl QueryError {
    /// The human-readable error message.
    pub fn message(&self) -> &str {
        match self {
            QueryError::NotFound(message) => message,
            QueryError::DatasetUnavailable(message) => message,
        }
    }

    /// The logical status code: 404 for no match, 500 for a missing
    /// dataset.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::NotFound(_) => 404,
            QueryError::DatasetUnavailable(_) => 500,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QueryError {}

impl From<DatasetError> for QueryError {
    fn from(err: DatasetError) -> Self {
        QueryError::DatasetUnavailable(err.to_string())
    }
}

/// Get a card by exact id match.
///
/// Picks the first match deterministically should the dataset ever
/// carry a duplicate id.
pub fn get_card_data<'a>(table: &'a CardTable, card_id: &str) -> Result<&'a Card, QueryError> {
    debug!("get_card_data: card_id={}", card_id);
    table
        .card_by_id(card_id)
        .ok_or_else(|| QueryError::NotFound("Card not found".to_string()))
}

/// Fuzzy-search cards by Pokémon name.
///
/// Scores the query against every distinct name and, when the best
/// candidate reaches the threshold, returns every card carrying that
/// winning name. The one-to-many expansion is deliberate: a name can
/// appear on several distinct cards.
pub fn fuzzy_search_pokemon<'a>(
    table: &'a CardTable,
    scorer: &dyn SimilarityScorer,
    name: &str,
) -> Result<Vec<&'a Card>, QueryError> {
    let names = table.distinct_names();
    match extract_best(scorer, name, names) {
        Some((winner, score)) if score >= FUZZY_MATCH_THRESHOLD => {
            debug!(
                "fuzzy_search_pokemon: '{}' matched '{}' with score {}",
                name, winner, score
            );
            Ok(table
                .cards()
                .iter()
                .filter(|card| card.name == winner)
                .collect())
        }
        _ => Err(QueryError::NotFound("No close match found".to_string())),
    }
}

/// Return every card of the given color. Comparison is case-insensitive
/// on both sides.
pub fn filter_by_color<'a>(table: &'a CardTable, color: &str) -> Result<Vec<&'a Card>, QueryError> {
    debug!("filter_by_color: color={}", color);
    let wanted = color.to_lowercase();
    let matches: Vec<&Card> = table
        .cards()
        .iter()
        .filter(|card| card.color.to_lowercase() == wanted)
        .collect();

    if matches.is_empty() {
        Err(QueryError::NotFound("No cards found".to_string()))
    } else {
        Ok(matches)
    }
}

/// Fuzzy-search cards by ability description.
///
/// Flattens the ability index fresh, scores the query against every
/// info text, then returns every card owning an ability worded exactly
/// like the winner. Several cards can share identical wording; all of
/// them are returned, in dataset order, without duplicates.
pub fn fuzzy_search_ability<'a>(
    table: &'a CardTable,
    scorer: &dyn SimilarityScorer,
    ability_query: &str,
) -> Result<Vec<&'a Card>, QueryError> {
    let index = table.ability_index();
    match extract_best(scorer, ability_query, index.iter().map(|&(info, _)| info)) {
        Some((winner, score)) if score >= FUZZY_MATCH_THRESHOLD => {
            debug!(
                "fuzzy_search_ability: '{}' matched '{}' with score {}",
                ability_query, winner, score
            );
            let mut matched_ids: Vec<&str> = Vec::new();
            for &(info, card_id) in &index {
                if info == winner && !matched_ids.contains(&card_id) {
                    matched_ids.push(card_id);
                }
            }
            Ok(table
                .cards()
                .iter()
                .filter(|card| matched_ids.contains(&card.id.as_str()))
                .collect())
        }
        _ => Err(QueryError::NotFound(
            "No matching abilities found".to_string(),
        )),
    }
}
