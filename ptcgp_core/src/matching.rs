//! String-similarity scoring for fuzzy card and ability lookups.

/// Minimum score for a fuzzy match to count. Best candidates scoring
/// strictly below this are treated as no match at all.
pub const FUZZY_MATCH_THRESHOLD: u8 = 60;

/// Scores how similar two strings are, from 0 (no resemblance) to 100
/// (identical after normalization).
///
/// The query operations only depend on this trait, so the concrete
/// algorithm is swappable.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Token-sort similarity: lowercase both strings, split on
/// non-alphanumeric characters, sort the tokens, and compare the
/// rejoined forms with normalized Levenshtein distance.
///
/// Case, whitespace, punctuation and word order never affect the score;
/// an exact match after normalization scores 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortScorer;

impl TokenSortScorer {
    fn normalize(s: &str) -> String {
        let lower = s.to_lowercase();
        let mut tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }
}

impl SimilarityScorer for TokenSortScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a = Self::normalize(a);
        let b = Self::normalize(b);
        (strsim::normalized_levenshtein(&a, &b) * 100.0).round() as u8
    }
}

/// Score `query` against every candidate and return the best one with
/// its score. Ties keep the earliest candidate, so the result is
/// deterministic in input order. Returns `None` for an empty candidate
/// list.
pub fn extract_best<'a, I>(
    scorer: &dyn SimilarityScorer,
    query: &str,
    candidates: I,
) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;
    for candidate in candidates {
        let score = scorer.score(query, candidate);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((candidate, score)),
        }
    }
    best
}
