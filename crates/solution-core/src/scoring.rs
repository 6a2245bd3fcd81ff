/// Per-record scorers and the relevance combiner.
///
/// Lexical and semantic scorers measure text overlap through a
/// [`SimilarityStrategy`]. Context and feasibility scorers start from a base
/// of 0.5 and add bonuses from the compatibility tables below. Every scorer
/// returns a value in [0, 1].
use crate::keywords::extract_keywords;
use crate::model::{Budget, BusinessContext, CompanySize, Complexity, SolutionRecord, Urgency};
use crate::similarity::SimilarityStrategy;

pub const LEXICAL_WEIGHT: f64 = 0.4;
pub const SEMANTIC_WEIGHT: f64 = 0.35;
pub const CONTEXT_WEIGHT: f64 = 0.15;
pub const FEASIBILITY_WEIGHT: f64 = 0.10;

/// Records at or below this relevance are dropped before ranking.
pub const RELEVANCE_THRESHOLD: f64 = 0.1;

const BASE_SCORE: f64 = 0.5;
const INDUSTRY_BONUS: f64 = 0.3;

/// Which complexities a table row accepts.
#[derive(Debug, Clone, Copy)]
pub enum Compatible {
    Only(&'static [Complexity]),
    Any,
}

impl Compatible {
    fn accepts(self, complexity: Complexity) -> bool {
        match self {
            Self::Only(allowed) => allowed.contains(&complexity),
            Self::Any => true,
        }
    }
}

pub const SIZE_COMPLEXITY_TABLE: &[(CompanySize, Compatible, f64)] = &[
    (CompanySize::Small, Compatible::Only(&[Complexity::Low]), 0.2),
    (
        CompanySize::Medium,
        Compatible::Only(&[Complexity::Low, Complexity::Medium]),
        0.2,
    ),
    (
        CompanySize::Large,
        Compatible::Only(&[Complexity::Medium, Complexity::High]),
        0.2,
    ),
];

pub const BUDGET_COMPLEXITY_TABLE: &[(Budget, Compatible, f64)] = &[
    (Budget::Low, Compatible::Only(&[Complexity::Low]), 0.3),
    (
        Budget::Moderate,
        Compatible::Only(&[Complexity::Low, Complexity::Medium]),
        0.3,
    ),
    (
        Budget::High,
        Compatible::Only(&[Complexity::Medium, Complexity::High]),
        0.3,
    ),
    (Budget::Flexible, Compatible::Any, 0.2),
];

/// Urgency level, the time-to-value text it rewards, and the bonus.
pub const URGENCY_TIME_TABLE: &[(Urgency, &str, f64)] = &[
    (Urgency::High, "1-2 weeks", 0.2),
    (Urgency::Medium, "2-4 weeks", 0.2),
];

fn table_bonus<K: PartialEq + Copy>(
    table: &[(K, Compatible, f64)],
    key: K,
    complexity: Complexity,
) -> f64 {
    table
        .iter()
        .find(|(row_key, _, _)| *row_key == key)
        .filter(|(_, compatible, _)| compatible.accepts(complexity))
        .map(|(_, _, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// The pain point prepared once per request.
#[derive(Debug, Clone)]
pub struct Query {
    /// Lowercased full text, for whole-string comparison.
    pub text: String,
    pub keywords: Vec<String>,
}

impl Query {
    pub fn new(pain_point: &str) -> Self {
        Self {
            text: pain_point.trim().to_lowercase(),
            keywords: extract_keywords(pain_point),
        }
    }
}

/// The four factor scores for one record and their weighted combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub lexical: f64,
    pub semantic: f64,
    pub context: f64,
    pub feasibility: f64,
    pub relevance: f64,
}

impl ScoreBreakdown {
    pub fn passes_threshold(&self) -> bool {
        self.relevance > RELEVANCE_THRESHOLD
    }
}

pub fn score_record(
    query: &Query,
    context: &BusinessContext,
    record: &SolutionRecord,
    strategy: SimilarityStrategy,
) -> ScoreBreakdown {
    let lexical = lexical_score(&query.keywords, record, strategy);
    let semantic = semantic_score(&query.text, record, strategy);
    let contextual = context_score(context, record);
    let feasibility = feasibility_score(context, record);
    ScoreBreakdown {
        lexical,
        semantic,
        context: contextual,
        feasibility,
        relevance: combine(lexical, semantic, contextual, feasibility),
    }
}

/// Mean over pain-point keywords of the best similarity against any record keyword.
pub fn lexical_score(
    pain_keywords: &[String],
    record: &SolutionRecord,
    strategy: SimilarityStrategy,
) -> f64 {
    if pain_keywords.is_empty() || record.keywords.is_empty() {
        return 0.0;
    }
    let record_keywords: Vec<String> = record.keywords.iter().map(|k| k.to_lowercase()).collect();
    let total: f64 = pain_keywords
        .iter()
        .map(|pk| {
            record_keywords
                .iter()
                .map(|rk| strategy.similarity(pk, rk))
                .fold(0.0, f64::max)
        })
        .sum();
    (total / pain_keywords.len() as f64).clamp(0.0, 1.0)
}

/// Best whole-string similarity between the pain point and an addressed pain point.
pub fn semantic_score(pain_text: &str, record: &SolutionRecord, strategy: SimilarityStrategy) -> f64 {
    let pain_text = pain_text.to_lowercase();
    record
        .pain_points
        .iter()
        .map(|addressed| strategy.similarity(&pain_text, &addressed.to_lowercase()))
        .fold(0.0, f64::max)
        .clamp(0.0, 1.0)
}

pub fn context_score(context: &BusinessContext, record: &SolutionRecord) -> f64 {
    let mut score = BASE_SCORE;

    if let Some(industry) = context.industry.as_deref() {
        let industry = industry.to_lowercase();
        if record
            .use_cases
            .iter()
            .any(|case| case.to_lowercase().contains(&industry))
        {
            score += INDUSTRY_BONUS;
        }
    }

    score += table_bonus(SIZE_COMPLEXITY_TABLE, context.company_size, record.complexity);
    score.clamp(0.0, 1.0)
}

pub fn feasibility_score(context: &BusinessContext, record: &SolutionRecord) -> f64 {
    let mut score = BASE_SCORE;

    score += table_bonus(BUDGET_COMPLEXITY_TABLE, context.budget, record.complexity);

    score += URGENCY_TIME_TABLE
        .iter()
        .find(|(urgency, _, _)| *urgency == context.urgency)
        .filter(|(_, bucket, _)| record.time_to_value.contains(*bucket))
        .map(|(_, _, bonus)| *bonus)
        .unwrap_or(0.0);

    score.clamp(0.0, 1.0)
}

pub fn combine(lexical: f64, semantic: f64, context: f64, feasibility: f64) -> f64 {
    (LEXICAL_WEIGHT * lexical
        + SEMANTIC_WEIGHT * semantic
        + CONTEXT_WEIGHT * context
        + FEASIBILITY_WEIGHT * feasibility)
        .clamp(0.0, 1.0)
}

/// Round to two decimals, the precision reported to callers.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn record(complexity: Complexity) -> SolutionRecord {
        SolutionRecord {
            id: "support_bot".to_string(),
            name: "Support Bot".to_string(),
            category: "AI".to_string(),
            subcategory: "Service".to_string(),
            description: "Answers repetitive questions".to_string(),
            keywords: vec![
                "support".to_string(),
                "Repetitive".to_string(),
                "automation".to_string(),
            ],
            pain_points: vec!["agents overwhelmed by repetitive questions".to_string()],
            use_cases: vec!["E-commerce customer support".to_string()],
            complexity,
            time_to_value: "1-2 weeks".to_string(),
            integration_requirements: Vec::new(),
            success_metrics: Vec::new(),
            key_capabilities: Vec::new(),
        }
    }

    fn context(industry: Option<&str>, size: &str, budget: &str, urgency: &str) -> BusinessContext {
        BusinessContext::from_parts(industry, Some(size), Some(budget), Some(urgency), None)
    }

    #[test]
    fn lexical_is_zero_for_stop_words_only() {
        let query = Query::new("the a an");
        let r = record(Complexity::Low);
        assert_eq!(lexical_score(&query.keywords, &r, SimilarityStrategy::EditDistance), 0.0);
    }

    #[test]
    fn lexical_is_zero_without_record_keywords() {
        let query = Query::new("support questions");
        let mut r = record(Complexity::Low);
        r.keywords.clear();
        assert_eq!(lexical_score(&query.keywords, &r, SimilarityStrategy::EditDistance), 0.0);
    }

    #[test]
    fn lexical_averages_best_matches() {
        let r = record(Complexity::Low);
        let keywords = vec!["support".to_string(), "repetitive".to_string()];
        let score = lexical_score(&keywords, &r, SimilarityStrategy::EditDistance);
        assert!((score - 1.0).abs() < EPS);

        // One exact hit, one keyword with no token overlap under Jaccard.
        let keywords = vec!["support".to_string(), "billing".to_string()];
        let score = lexical_score(&keywords, &r, SimilarityStrategy::TokenJaccard);
        assert!((score - 0.5).abs() < EPS);
    }

    #[test]
    fn semantic_takes_best_addressed_pain_point() {
        let mut r = record(Complexity::Low);
        r.pain_points.push("Agents Overwhelmed By Repetitive Questions".to_string());
        let score = semantic_score(
            "agents overwhelmed by repetitive questions",
            &r,
            SimilarityStrategy::EditDistance,
        );
        assert!((score - 1.0).abs() < EPS);

        r.pain_points.clear();
        assert_eq!(semantic_score("anything", &r, SimilarityStrategy::EditDistance), 0.0);
    }

    #[test]
    fn empty_context_scores_exactly_base() {
        let empty = BusinessContext::default();
        for complexity in [Complexity::Low, Complexity::Medium, Complexity::High, Complexity::Unknown] {
            assert_eq!(context_score(&empty, &record(complexity)), 0.5);
            assert_eq!(feasibility_score(&empty, &record(complexity)), 0.5);
        }
    }

    #[test]
    fn context_industry_and_size_bonuses() {
        let r = record(Complexity::Medium);
        let ctx = context(Some("e-commerce"), "medium", "", "");
        assert!((context_score(&ctx, &r) - 1.0).abs() < EPS);

        let ctx = context(Some("retail"), "small", "", "");
        assert!((context_score(&ctx, &r) - 0.5).abs() < EPS);

        let ctx = context(None, "large", "", "");
        assert!((context_score(&ctx, &r) - 0.7).abs() < EPS);
    }

    #[test]
    fn size_complexity_table() {
        let cases = [
            ("small", Complexity::Low, 0.2),
            ("small", Complexity::Medium, 0.0),
            ("small", Complexity::High, 0.0),
            ("medium", Complexity::Low, 0.2),
            ("medium", Complexity::Medium, 0.2),
            ("medium", Complexity::High, 0.0),
            ("large", Complexity::Low, 0.0),
            ("large", Complexity::Medium, 0.2),
            ("large", Complexity::High, 0.2),
            ("enterprise", Complexity::High, 0.0),
            ("large", Complexity::Unknown, 0.0),
        ];
        for (size, complexity, bonus) in cases {
            let ctx = context(None, size, "", "");
            let got = context_score(&ctx, &record(complexity));
            assert!((got - (0.5 + bonus)).abs() < EPS, "{size}/{complexity:?}: {got}");
        }
    }

    #[test]
    fn budget_complexity_table() {
        let cases = [
            ("low", Complexity::Low, 0.3),
            ("low", Complexity::Medium, 0.0),
            ("moderate", Complexity::Low, 0.3),
            ("moderate", Complexity::Medium, 0.3),
            ("moderate", Complexity::High, 0.0),
            ("high", Complexity::Low, 0.0),
            ("high", Complexity::Medium, 0.3),
            ("high", Complexity::High, 0.3),
            ("flexible", Complexity::High, 0.2),
            ("flexible", Complexity::Unknown, 0.2),
            ("", Complexity::Low, 0.0),
        ];
        for (budget, complexity, bonus) in cases {
            let ctx = context(None, "", budget, "");
            let mut r = record(complexity);
            r.time_to_value.clear();
            let got = feasibility_score(&ctx, &r);
            assert!((got - (0.5 + bonus)).abs() < EPS, "{budget}/{complexity:?}: {got}");
        }
    }

    #[test]
    fn urgency_rewards_matching_time_to_value() {
        let mut r = record(Complexity::Unknown);
        let high = context(None, "", "", "high");
        let medium = context(None, "", "", "medium");

        r.time_to_value = "1-2 weeks".to_string();
        assert!((feasibility_score(&high, &r) - 0.7).abs() < EPS);
        assert!((feasibility_score(&medium, &r) - 0.5).abs() < EPS);

        r.time_to_value = "Typically 2-4 weeks".to_string();
        assert!((feasibility_score(&high, &r) - 0.5).abs() < EPS);
        assert!((feasibility_score(&medium, &r) - 0.7).abs() < EPS);
    }

    #[test]
    fn feasibility_is_capped() {
        let r = record(Complexity::Low);
        let ctx = context(None, "", "low", "high");
        let score = feasibility_score(&ctx, &r);
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn combine_weights_and_clamps() {
        assert!((combine(1.0, 1.0, 1.0, 1.0) - 1.0).abs() < EPS);
        assert!((combine(0.0, 0.0, 0.5, 0.5) - 0.125).abs() < EPS);
        assert!((combine(0.5, 0.0, 0.0, 0.0) - 0.2).abs() < EPS);
    }

    #[test]
    fn breakdown_stays_in_unit_interval() {
        let r = record(Complexity::Medium);
        let ctx = context(Some("e-commerce"), "medium", "flexible", "high");
        for text in ["", "the a an", "support", "Our support agents are overwhelmed"] {
            for strategy in [SimilarityStrategy::EditDistance, SimilarityStrategy::TokenJaccard] {
                let b = score_record(&Query::new(text), &ctx, &r, strategy);
                for value in [b.lexical, b.semantic, b.context, b.feasibility, b.relevance] {
                    assert!((0.0..=1.0).contains(&value), "{text:?}: {b:?}");
                }
            }
        }
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }
}
