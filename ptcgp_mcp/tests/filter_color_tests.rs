mod helpers;

use helpers::{get_json, get_text, is_error, is_success, sample_table};
use ptcgp_mcp::tools::filter_color::{FilterByColorParams, execute};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_returns_all_cards_of_color() {
        let table = sample_table();
        let params = FilterByColorParams {
            color: "Grass".to_string(),
        };

        let result = execute(&table, &params);

        assert!(is_success(&result));
        let cards = get_json(&result);
        let ids: Vec<&str> = cards
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a1-001", "a1-007", "a2-098"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let table = sample_table();
        let capitalized = execute(
            &table,
            &FilterByColorParams {
                color: "Grass".to_string(),
            },
        );
        let lowercased = execute(
            &table,
            &FilterByColorParams {
                color: "grass".to_string(),
            },
        );

        assert!(is_success(&capitalized));
        assert!(is_success(&lowercased));
        assert_eq!(get_text(&capitalized), get_text(&lowercased));
    }

    #[test]
    fn test_filter_unknown_color() {
        let table = sample_table();
        let params = FilterByColorParams {
            color: "nonexistent-color".to_string(),
        };

        let result = execute(&table, &params);

        assert!(is_error(&result));
        let payload = get_json(&result);
        assert_eq!(payload["error"], "No cards found");
        assert_eq!(payload["code"], 404);
    }
}
