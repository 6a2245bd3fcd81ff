/// Pain-point matcher: scores every catalog record, drops the noise, ranks the
/// rest and summarizes the result with a confidence score.
///
/// The matcher borrows an immutable [`Catalog`]; it holds no other state, so
/// the same inputs always produce the same output.
use tracing::debug;

use crate::catalog::Catalog;
use crate::confidence::confidence;
use crate::error::CoreError;
use crate::model::{BusinessContext, MatchResult, ScoredSolution, SolutionRecord};
use crate::scoring::{round2, score_record, Query, ScoreBreakdown};
use crate::similarity::SimilarityStrategy;

pub const DEFAULT_MAX_RESULTS: usize = 3;

pub struct SolutionMatcher<'a> {
    catalog: &'a Catalog,
    strategy: SimilarityStrategy,
}

impl<'a> SolutionMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_strategy(catalog, SimilarityStrategy::default())
    }

    pub fn with_strategy(catalog: &'a Catalog, strategy: SimilarityStrategy) -> Self {
        Self { catalog, strategy }
    }

    /// Score every record in catalog order, without thresholding.
    pub fn score_all(
        &self,
        pain_point: &str,
        context: &BusinessContext,
    ) -> Vec<(&'a SolutionRecord, ScoreBreakdown)> {
        let query = Query::new(pain_point);
        self.catalog
            .all()
            .iter()
            .map(|record| (record, score_record(&query, context, record, self.strategy)))
            .collect()
    }

    /// Rank the records relevant to `pain_point`, keeping at most `max_results`.
    ///
    /// Returns [`CoreError::Validation`] for a blank pain point before any
    /// scoring happens. Records with relevance at or below the threshold are
    /// dropped; survivors are ordered by relevance with ties kept in catalog
    /// order. Confidence is computed over the reported (rounded) scores.
    pub fn find_solutions(
        &self,
        pain_point: &str,
        context: &BusinessContext,
        max_results: usize,
    ) -> Result<MatchResult<'a>, CoreError> {
        if pain_point.trim().is_empty() {
            return Err(CoreError::Validation("Pain point is required".to_string()));
        }

        let candidates: Vec<(&'a SolutionRecord, f64)> = self
            .score_all(pain_point, context)
            .into_iter()
            .filter(|(_, breakdown)| breakdown.passes_threshold())
            .map(|(record, breakdown)| (record, breakdown.relevance))
            .collect();
        let solutions = rank(candidates, max_results);

        let scores: Vec<f64> = solutions.iter().map(|s| s.relevance).collect();
        let confidence = confidence(&scores);

        debug!(
            catalog = self.catalog.len(),
            matched = solutions.len(),
            confidence,
            strategy = self.strategy.as_str(),
            "pain point matched"
        );

        Ok(MatchResult {
            solutions,
            confidence,
        })
    }
}

/// Round each relevance to its reported precision, then order by it.
///
/// Sorting happens on the rounded value so records that report the same score
/// keep catalog order; `sort_by` is stable.
fn rank<'a>(
    candidates: Vec<(&'a SolutionRecord, f64)>,
    max_results: usize,
) -> Vec<ScoredSolution<'a>> {
    let mut solutions: Vec<ScoredSolution<'a>> = candidates
        .into_iter()
        .map(|(record, relevance)| ScoredSolution {
            record,
            relevance: round2(relevance),
        })
        .collect();
    solutions.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    solutions.truncate(max_results);
    solutions
}
