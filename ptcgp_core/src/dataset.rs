//! Dataset loading: CSV rows into an immutable in-memory card table.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::card::{Ability, AttackDef, Card};

/// Columns the loader interprets. Everything else passes through.
const KNOWN_COLUMNS: [&str; 5] = ["id", "name", "color", "attack", "ability"];

/// Errors that can occur while loading the card dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// Backing file missing or unreadable.
    Unavailable(io::Error),
    /// The CSV header lacks a required column.
    MissingColumn(&'static str),
    /// A row could not be read as CSV.
    Malformed(csv::Error),
    /// A JSON-embedded cell failed to decode. `row` is the 1-based data
    /// row number (the header row is not counted).
    Corrupt {
        row: usize,
        column: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Unavailable(_) => write!(f, "Card database missing"),
            DatasetError::MissingColumn(column) => {
                write!(f, "Card database is missing required column '{}'", column)
            }
            DatasetError::Malformed(err) => {
                write!(f, "Card database row could not be read: {}", err)
            }
            DatasetError::Corrupt {
                row,
                column,
                source,
            } => {
                write!(
                    f,
                    "Invalid JSON in column '{}' at data row {}: {}",
                    column, row, source
                )
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Unavailable(err) => Some(err),
            DatasetError::MissingColumn(_) => None,
            DatasetError::Malformed(err) => Some(err),
            DatasetError::Corrupt { source, .. } => Some(source),
        }
    }
}

/// The full in-memory card collection, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTable {
    cards: Vec<Card>,
}

impl CardTable {
    /// Load the card table from a CSV file.
    ///
    /// The `attack` and `ability` cells are decoded as JSON per row;
    /// empty cells become empty sequences. The load aborts on the first
    /// cell that fails to decode, reporting its row and column. No row
    /// is ever silently skipped.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        debug!("Loading card dataset from {:?}", path);

        let file = File::open(path).map_err(DatasetError::Unavailable)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers().map_err(DatasetError::Malformed)?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let id_col = column("id")?;
        let name_col = column("name")?;
        let color_col = column("color")?;
        let attack_col = column("attack")?;
        let ability_col = column("ability")?;

        let mut cards = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(DatasetError::Malformed)?;
            let row = index + 1;

            let attack: Vec<AttackDef> = decode_cell(record.get(attack_col), row, "attack")?;
            let ability: Vec<Ability> = decode_cell(record.get(ability_col), row, "ability")?;

            let mut extra = BTreeMap::new();
            for (col, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col) {
                    if !KNOWN_COLUMNS.contains(&header) {
                        extra.insert(header.to_string(), value.to_string());
                    }
                }
            }

            cards.push(Card {
                id: record.get(id_col).unwrap_or_default().to_string(),
                name: record.get(name_col).unwrap_or_default().to_string(),
                color: record.get(color_col).unwrap_or_default().to_string(),
                attack,
                ability,
                extra,
            });
        }

        debug!("Loaded {} cards from {:?}", cards.len(), path);
        Ok(Self { cards })
    }

    /// Build a table directly from already-constructed cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// All cards in dataset order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The first card with the given id, if any. Ids are unique in a
    /// well-formed dataset; first match keeps lookups deterministic
    /// regardless.
    pub fn card_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Distinct card names, in first-seen dataset order.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !names.contains(&card.name.as_str()) {
                names.push(card.name.as_str());
            }
        }
        names
    }

    /// Flatten every card's abilities into `(info text, owning card id)`
    /// pairs, in dataset order. Recomputed on demand; never persisted.
    pub fn ability_index(&self) -> Vec<(&str, &str)> {
        let mut index = Vec::new();
        for card in &self.cards {
            for ability in &card.ability {
                index.push((ability.info.as_str(), card.id.as_str()));
            }
        }
        index
    }
}

/// Decode one JSON-embedded cell. Empty or missing cells decode to an
/// empty sequence; anything else must be valid JSON for the target type.
fn decode_cell<T: DeserializeOwned>(
    cell: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Vec<T>, DatasetError> {
    match cell.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text).map_err(|source| DatasetError::Corrupt {
            row,
            column,
            source,
        }),
    }
}
