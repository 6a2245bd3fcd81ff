/// MCP server for the pain-point agent.
///
/// Exposes seven tools:
/// - `match_pain_point`: Rank catalog solutions for a described business problem
/// - `get_solution`: Look up a single solution by ID
/// - `list_category`: List the solutions in a category
/// - `search_catalog`: Substring search over the catalog
/// - `catalog_statistics`: Counts per category and complexity
/// - `evaluate_batch`: Run many match requests and report aggregate metrics
/// - `reload_catalog`: Re-read the catalog file
use std::path::PathBuf;
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

use solution_core::catalog::Catalog;
use solution_core::keywords::extract_keywords;
use solution_core::mcp_api::{
    CatalogStatisticsResponse, CategoryListResponse, EvaluateBatchParams, EvaluateBatchResponse,
    GetSolutionParams, ListCategoryParams, MatchPainPointParams, MatchResponse,
    ReloadCatalogResponse, SearchCatalogParams, SearchCatalogResponse, SolutionDetailResponse,
    SolutionSummary,
};

use crate::agent::{self, MatchSettings};

const DEFAULT_SEARCH_LIMIT: u32 = 10;
const MAX_SEARCH_LIMIT: u32 = 50;

// --- MCP Server ---

/// Requests work on an `Arc<Catalog>` snapshot taken under a short read lock;
/// a reload swaps the snapshot without disturbing requests already running.
#[derive(Clone)]
pub struct PainPointServer {
    catalog: Arc<RwLock<Arc<Catalog>>>,
    settings: MatchSettings,
    catalog_path: PathBuf,
    tool_router: ToolRouter<PainPointServer>,
}

impl PainPointServer {
    pub fn new(catalog: Catalog, settings: MatchSettings, catalog_path: PathBuf) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            settings,
            catalog_path,
            tool_router: Self::tool_router(),
        }
    }

    async fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&*self.catalog.read().await)
    }
}

#[tool_router]
impl PainPointServer {
    #[tool(description = "Match a described customer-experience pain point to the most relevant catalog solutions. Optional business_context (industry, company_size, budget_constraints, urgency_level) adjusts the ranking. Returns ranked solutions with relevance scores, a confidence score, alternative approaches and next steps.")]
    async fn match_pain_point(
        &self,
        Parameters(params): Parameters<MatchPainPointParams>,
    ) -> Result<Json<MatchResponse>, String> {
        let catalog = self.snapshot().await;
        Ok(Json(agent::process_request(&catalog, &self.settings, &params)))
    }

    #[tool(description = "Get the full record of a catalog solution by ID (e.g. 'ai_customer_service_agent').")]
    async fn get_solution(
        &self,
        Parameters(params): Parameters<GetSolutionParams>,
    ) -> Result<Json<SolutionDetailResponse>, String> {
        let solution_id = params.solution_id.trim().to_string();
        if solution_id.is_empty() {
            return Err("solution_id must not be empty".to_string());
        }

        let catalog = self.snapshot().await;
        let record = catalog
            .get(&solution_id)
            .ok_or_else(|| format!("solution not found: {solution_id}"))?;

        Ok(Json(SolutionDetailResponse::from(record)))
    }

    #[tool(description = "List all catalog solutions in a category such as 'AI & Automation' or 'Analytics' (case-insensitive).")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryListResponse>, String> {
        let category = params.category.trim().to_string();
        if category.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let catalog = self.snapshot().await;
        let records = catalog.by_category(&category);
        let Some(first) = records.first() else {
            return Err(format!(
                "unknown category: '{category}'. Available categories: {}",
                catalog.categories().join(", ")
            ));
        };

        Ok(Json(CategoryListResponse {
            category: first.category.clone(),
            solutions: records.iter().map(|r| SolutionSummary::from(*r)).collect(),
        }))
    }

    #[tool(description = "Search catalog solutions by text. Matches names, descriptions, keywords and addressed pain points; falls back to keyword matching when no substring matches.")]
    async fn search_catalog(
        &self,
        Parameters(params): Parameters<SearchCatalogParams>,
    ) -> Result<Json<SearchCatalogResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        let limit = params
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .min(MAX_SEARCH_LIMIT) as usize;

        let catalog = self.snapshot().await;
        let mut records = catalog.search(&query);
        if records.is_empty() {
            records = catalog.by_keywords(&extract_keywords(&query));
        }

        Ok(Json(SearchCatalogResponse {
            results: records
                .into_iter()
                .take(limit)
                .map(SolutionSummary::from)
                .collect(),
        }))
    }

    #[tool(description = "Summarize the loaded catalog: total solutions and counts per category and implementation complexity.")]
    async fn catalog_statistics(&self) -> Result<Json<CatalogStatisticsResponse>, String> {
        let stats = self.snapshot().await.statistics();
        Ok(Json(CatalogStatisticsResponse {
            total_solutions: stats.total,
            categories: stats.categories,
            complexities: stats.complexities,
        }))
    }

    #[tool(description = "Run a batch of match_pain_point requests and report the top solution per case plus match rate, average confidence and average top relevance.")]
    async fn evaluate_batch(
        &self,
        Parameters(params): Parameters<EvaluateBatchParams>,
    ) -> Result<Json<EvaluateBatchResponse>, String> {
        let catalog = self.snapshot().await;
        Ok(Json(agent::evaluate_batch(
            &catalog,
            &self.settings,
            &params.cases,
        )))
    }

    #[tool(description = "Re-read the solution catalog from disk. On failure the current catalog stays loaded and the error is returned.")]
    async fn reload_catalog(&self) -> Result<Json<ReloadCatalogResponse>, String> {
        info!(path = %self.catalog_path.display(), "reload_catalog tool invoked");

        let catalog = Catalog::load(&self.catalog_path).map_err(|e| {
            warn!(error = %e, "catalog reload failed, keeping current catalog");
            format!("reload failed: {e}")
        })?;
        let solution_count = catalog.len();

        *self.catalog.write().await = Arc::new(catalog);
        info!(solution_count, "catalog snapshot replaced");

        Ok(Json(ReloadCatalogResponse {
            path: self.catalog_path.display().to_string(),
            solution_count,
        }))
    }
}

#[tool_handler]
impl ServerHandler for PainPointServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "pain-point-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Customer-experience pain point agent. Use match_pain_point to rank \
                 catalog solutions for a described business problem, get_solution, \
                 list_category and search_catalog to browse the catalog, \
                 catalog_statistics for an overview, evaluate_batch to score many \
                 requests at once, and reload_catalog to pick up catalog edits."
                    .to_string(),
            ),
        }
    }
}
