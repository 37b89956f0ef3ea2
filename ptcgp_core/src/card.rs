//! The card record type and its JSON-embedded sub-records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One attack definition, decoded from the `attack` column.
///
/// Attack objects have no fixed schema across card sets, so they stay
/// an open key/value mapping.
pub type AttackDef = serde_json::Map<String, Value>;

/// One ability definition, decoded from the `ability` column.
///
/// Every ability carries a human-readable `info` description; anything
/// else the dataset embeds passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Human-readable ability description, used for fuzzy ability search.
    pub info: String,

    /// Remaining keys of the ability object (e.g. its display name).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One row of the card dataset.
///
/// The five known columns are typed; every other CSV column passes
/// through in `extra` and is flattened back into the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier (primary key).
    pub id: String,

    /// Pokémon name. Not unique: a name can appear on several cards.
    pub name: String,

    /// Categorical color attribute, compared case-insensitively.
    pub color: String,

    /// Attack definitions, in dataset order. Empty if the cell was empty.
    #[serde(default)]
    pub attack: Vec<AttackDef>,

    /// Ability definitions, in dataset order. Empty if the cell was empty.
    #[serde(default)]
    pub ability: Vec<Ability>,

    /// Uninterpreted passthrough columns, keyed by CSV header.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_serializes_with_flattened_extra() {
        let mut extra = BTreeMap::new();
        extra.insert("rarity".to_string(), "Common".to_string());

        let card = Card {
            id: "a1-001".to_string(),
            name: "Bulbasaur".to_string(),
            color: "Grass".to_string(),
            attack: Vec::new(),
            ability: Vec::new(),
            extra,
        };

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["id"], "a1-001");
        assert_eq!(value["rarity"], "Common");
        // Flattened, not nested under an "extra" key.
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_ability_keeps_unknown_keys() {
        let ability: Ability =
            serde_json::from_str(r#"{"name":"Powder Heal","info":"Heal 20 damage."}"#).unwrap();
        assert_eq!(ability.info, "Heal 20 damage.");
        assert_eq!(ability.extra["name"], "Powder Heal");

        let round_tripped = serde_json::to_value(&ability).unwrap();
        assert_eq!(round_tripped["name"], "Powder Heal");
        assert_eq!(round_tripped["info"], "Heal 20 damage.");
    }
}
