/// Request handling for the pain-point agent.
///
/// Turns a `match_pain_point` request into the full response: validated input,
/// ranked solutions with presentation fields, confidence, alternative
/// approaches and next steps. Everything here is synchronous and works on a
/// borrowed catalog snapshot.
use tracing::debug;

use solution_core::catalog::Catalog;
use solution_core::error::CoreError;
use solution_core::matcher::SolutionMatcher;
use solution_core::mcp_api::{
    BatchMetrics, CaseOutcome, EvaluateBatchResponse, MatchPainPointParams, MatchResponse,
    SuggestedSolution,
};
use solution_core::model::{BusinessContext, ScoredSolution};
use solution_core::scoring::round2;
use solution_core::similarity::SimilarityStrategy;

/// Upper bound on `max_results` accepted from a request.
pub const MAX_RESULTS_CAP: usize = 20;
const MAX_NEXT_STEPS: usize = 5;
const MAX_ALTERNATIVES: usize = 3;

const ALTERNATIVE_APPROACHES: &[&str] = &[
    "Consider manual process improvements first",
    "Implement basic automation tools",
    "Hire additional staff for immediate relief",
    "Use existing tools more effectively",
];

const GENERAL_NEXT_STEPS: &[&str] = &[
    "Conduct pilot program with small team",
    "Measure current baseline metrics",
    "Set up success measurement framework",
];

#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    /// Used when the request does not set `max_results`.
    pub max_results: usize,
    pub similarity: SimilarityStrategy,
}

pub fn process_request(
    catalog: &Catalog,
    settings: &MatchSettings,
    params: &MatchPainPointParams,
) -> MatchResponse {
    let pain_point = params.pain_point.as_deref().unwrap_or_default();
    let context = params
        .business_context
        .as_ref()
        .map(BusinessContext::from)
        .unwrap_or_default();
    let max_results = params
        .max_results
        .map(|n| (n as usize).min(MAX_RESULTS_CAP))
        .unwrap_or(settings.max_results);

    let matcher = SolutionMatcher::with_strategy(catalog, settings.similarity);
    let result = match matcher.find_solutions(pain_point, &context, max_results) {
        Ok(result) => result,
        Err(CoreError::Validation(message)) => {
            debug!(%message, "request rejected");
            return MatchResponse::error(message);
        }
        Err(e) => return MatchResponse::error(e.to_string()),
    };

    MatchResponse {
        error: None,
        next_steps: next_steps(&result.solutions),
        suggested_solutions: result.solutions.iter().map(to_suggestion).collect(),
        confidence_score: round2(result.confidence),
        alternative_approaches: alternative_approaches(),
    }
}

fn to_suggestion(solution: &ScoredSolution<'_>) -> SuggestedSolution {
    let record = solution.record;
    SuggestedSolution {
        feature_name: record.name.clone(),
        category: record.category_label(),
        description: record.description.clone(),
        relevance_score: solution.relevance,
        how_it_helps: solution.how_it_helps(),
        implementation_steps: record.integration_requirements.clone(),
        estimated_impact: solution.estimated_impact(),
        time_to_implement: record.time_to_value.clone(),
    }
}

pub fn alternative_approaches() -> Vec<String> {
    ALTERNATIVE_APPROACHES
        .iter()
        .take(MAX_ALTERNATIVES)
        .map(|s| s.to_string())
        .collect()
}

/// Steps for the top solution, if any, followed by general steps; at most five.
pub fn next_steps(solutions: &[ScoredSolution<'_>]) -> Vec<String> {
    let mut steps = Vec::new();
    if let Some(top) = solutions.first() {
        steps.push(format!("Schedule demo of {}", top.record.name));
        steps.push("Review implementation timeline and requirements".to_string());
        steps.push("Prepare training materials for team".to_string());
    }
    steps.extend(GENERAL_NEXT_STEPS.iter().map(|s| s.to_string()));
    steps.truncate(MAX_NEXT_STEPS);
    steps
}

/// Run each case and aggregate match rate, confidence and top relevance.
pub fn evaluate_batch(
    catalog: &Catalog,
    settings: &MatchSettings,
    cases: &[MatchPainPointParams],
) -> EvaluateBatchResponse {
    let outcomes: Vec<CaseOutcome> = cases
        .iter()
        .map(|case| {
            let response = process_request(catalog, settings, case);
            let top = response.suggested_solutions.first();
            CaseOutcome {
                pain_point: case.pain_point.clone().unwrap_or_default(),
                top_solution: top.map(|s| s.feature_name.clone()),
                top_relevance: top.map(|s| s.relevance_score),
                confidence_score: response.confidence_score,
                error: response.error,
            }
        })
        .collect();

    let metrics = batch_metrics(&outcomes);
    debug!(
        total = metrics.total_cases,
        matched = metrics.successful_matches,
        "batch evaluated"
    );
    EvaluateBatchResponse {
        cases: outcomes,
        metrics,
    }
}

fn batch_metrics(outcomes: &[CaseOutcome]) -> BatchMetrics {
    let total_cases = outcomes.len();
    if total_cases == 0 {
        return BatchMetrics::default();
    }
    let top_scores: Vec<f64> = outcomes.iter().filter_map(|o| o.top_relevance).collect();
    let successful_matches = top_scores.len();
    let confidence_sum: f64 = outcomes.iter().map(|o| o.confidence_score).sum();

    BatchMetrics {
        total_cases,
        successful_matches,
        match_rate: successful_matches as f64 / total_cases as f64,
        avg_confidence: confidence_sum / total_cases as f64,
        avg_top_relevance: if successful_matches == 0 {
            0.0
        } else {
            top_scores.iter().sum::<f64>() / successful_matches as f64
        },
    }
}
