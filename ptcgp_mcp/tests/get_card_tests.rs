mod helpers;

use helpers::{get_json, is_error, is_success, sample_table};
use ptcgp_mcp::tools::get_card::{GetCardParams, execute};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_card_success() {
        let table = sample_table();
        let params = GetCardParams {
            card_id: "a1-001".to_string(),
        };

        let result = execute(&table, &params);

        assert!(is_success(&result));
        let card = get_json(&result);
        assert_eq!(card["id"], "a1-001");
        assert_eq!(card["name"], "Bulbasaur");
        assert_eq!(card["attack"][0]["name"], "Vine Whip");
        assert_eq!(card["attack"][0]["damage"], 40);
        // Passthrough columns are flattened into the record.
        assert_eq!(card["rarity"], "Common");
    }

    #[test]
    fn test_get_card_with_ability() {
        let table = sample_table();
        let params = GetCardParams {
            card_id: "a1-007".to_string(),
        };

        let result = execute(&table, &params);

        assert!(is_success(&result));
        let card = get_json(&result);
        assert_eq!(
            card["ability"][0]["info"],
            "Heal 20 damage from each of your Pokemon."
        );
        assert_eq!(card["ability"][0]["name"], "Powder Heal");
    }

    #[test]
    fn test_get_card_not_found() {
        let table = sample_table();
        let params = GetCardParams {
            card_id: "__nonexistent__".to_string(),
        };

        let result = execute(&table, &params);

        assert!(is_error(&result));
        let payload = get_json(&result);
        assert_eq!(payload["error"], "Card not found");
        assert_eq!(payload["code"], 404);
    }
}
