/// Normalized string similarity in [0, 1].
///
/// Two strategies are available. `EditDistance` is the default: the
/// Levenshtein distance over Unicode scalar values, normalized by the longer
/// string, `1 - distance / max(len(a), len(b))`. Two empty strings are
/// identical and score 1.0. `TokenJaccard` compares word-token sets and scores
/// 0.0 when either side has no tokens.
use std::str::FromStr;

use crate::keywords::word_tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityStrategy {
    #[default]
    EditDistance,
    TokenJaccard,
}

impl SimilarityStrategy {
    pub fn similarity(self, a: &str, b: &str) -> f64 {
        match self {
            Self::EditDistance => edit_distance_ratio(a, b),
            Self::TokenJaccard => token_jaccard(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EditDistance => "levenshtein",
            Self::TokenJaccard => "jaccard",
        }
    }
}

impl FromStr for SimilarityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "levenshtein" | "edit_distance" | "edit-distance" => Ok(Self::EditDistance),
            "jaccard" | "token_jaccard" | "token-jaccard" => Ok(Self::TokenJaccard),
            other => Err(format!(
                "unknown similarity strategy '{other}' (expected 'levenshtein' or 'jaccard')"
            )),
        }
    }
}

pub fn edit_distance_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b).clamp(0.0, 1.0)
}

pub fn token_jaccard(a: &str, b: &str) -> f64 {
    let ta = word_tokens(a);
    let tb = word_tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let intersection = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    intersection as f64 / union as f64
}
