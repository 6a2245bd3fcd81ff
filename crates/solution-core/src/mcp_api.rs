use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{BusinessContext, SolutionRecord};

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct BusinessContextParams {
    /// Industry, e.g. "e-commerce" or "retail".
    pub industry: Option<String>,
    /// One of "small", "medium", "large".
    pub company_size: Option<String>,
    /// One of "low", "moderate", "high", "flexible".
    pub budget_constraints: Option<String>,
    /// One of "low", "medium", "high".
    pub urgency_level: Option<String>,
    /// Free text, e.g. "high" or "very_high". Not used for scoring.
    pub customer_volume: Option<String>,
}

impl From<&BusinessContextParams> for BusinessContext {
    fn from(params: &BusinessContextParams) -> Self {
        BusinessContext::from_parts(
            params.industry.as_deref(),
            params.company_size.as_deref(),
            params.budget_constraints.as_deref(),
            params.urgency_level.as_deref(),
            params.customer_volume.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct MatchPainPointParams {
    /// Free-text description of the business problem.
    #[serde(default)]
    pub pain_point: Option<String>,
    /// Optional situational metadata used to adjust the ranking.
    #[serde(default)]
    pub business_context: Option<BusinessContextParams>,
    /// Maximum number of solutions to return (default: 3, max: 20).
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestedSolution {
    pub feature_name: String,
    /// "<category> - <subcategory>"
    pub category: String,
    pub description: String,
    pub relevance_score: f64,
    pub how_it_helps: String,
    pub implementation_steps: Vec<String>,
    pub estimated_impact: String,
    pub time_to_implement: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MatchResponse {
    /// Present only when the request was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub suggested_solutions: Vec<SuggestedSolution>,
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_approaches: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

impl MatchResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSolutionParams {
    /// Stable solution ID such as "ai_customer_service_agent".
    pub solution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SolutionDetailResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub pain_points_addressed: Vec<String>,
    pub use_cases: Vec<String>,
    pub implementation_complexity: String,
    pub time_to_value: String,
    pub integration_requirements: Vec<String>,
    pub success_metrics: Vec<String>,
    pub key_capabilities: Vec<String>,
}

impl From<&SolutionRecord> for SolutionDetailResponse {
    fn from(record: &SolutionRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
            description: record.description.clone(),
            keywords: record.keywords.clone(),
            pain_points_addressed: record.pain_points.clone(),
            use_cases: record.use_cases.clone(),
            implementation_complexity: record.complexity.as_str().to_string(),
            time_to_value: record.time_to_value.clone(),
            integration_requirements: record.integration_requirements.clone(),
            success_metrics: record.success_metrics.clone(),
            key_capabilities: record.key_capabilities.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SolutionSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub implementation_complexity: String,
    pub time_to_value: String,
}

impl From<&SolutionRecord> for SolutionSummary {
    fn from(record: &SolutionRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category_label(),
            implementation_complexity: record.complexity.as_str().to_string(),
            time_to_value: record.time_to_value.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category name such as "AI & Automation" (case-insensitive).
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub category: String,
    pub solutions: Vec<SolutionSummary>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCatalogParams {
    /// Text matched as a substring of names, descriptions, keywords and pain points.
    pub query: String,
    /// Maximum number of results to return (default: 10, max: 50).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchCatalogResponse {
    pub results: Vec<SolutionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogStatisticsResponse {
    pub total_solutions: usize,
    pub categories: BTreeMap<String, usize>,
    pub complexities: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EvaluateBatchParams {
    /// Requests to run, each shaped like a `match_pain_point` call.
    pub cases: Vec<MatchPainPointParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaseOutcome {
    pub pain_point: String,
    pub top_solution: Option<String>,
    pub top_relevance: Option<f64>,
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchMetrics {
    pub total_cases: usize,
    pub successful_matches: usize,
    pub match_rate: f64,
    pub avg_confidence: f64,
    pub avg_top_relevance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateBatchResponse {
    pub cases: Vec<CaseOutcome>,
    pub metrics: BatchMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReloadCatalogResponse {
    pub path: String,
    pub solution_count: usize,
}
