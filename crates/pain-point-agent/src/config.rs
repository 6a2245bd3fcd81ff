use std::path::PathBuf;

use solution_core::matcher::DEFAULT_MAX_RESULTS;
use solution_core::similarity::SimilarityStrategy;

use crate::agent::MatchSettings;
use crate::error::AppError;

const DEFAULT_CATALOG_PATH: &str = "data/solutions.json";

/// Application configuration loaded explicitly from environment variables.
///
/// Every variable is optional. A missing or unreadable catalog is not a
/// configuration error; the server starts with an empty catalog instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON catalog of solution records.
    pub catalog_path: PathBuf,
    /// Number of solutions returned when a request does not ask for a count.
    pub max_results: usize,
    pub similarity: SimilarityStrategy,
    /// Serve MCP over TCP at this address instead of stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `SOLUTION_CATALOG_PATH` (default: "data/solutions.json")
    /// - `MATCH_MAX_RESULTS` (default: 3)
    /// - `MATCH_SIMILARITY`: "levenshtein" (default) or "jaccard"
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let catalog_path = lookup("SOLUTION_CATALOG_PATH")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let max_results = match lookup("MATCH_MAX_RESULTS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "MATCH_MAX_RESULTS must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_MAX_RESULTS,
        };

        let similarity = match lookup("MATCH_SIMILARITY") {
            Some(raw) => raw.parse::<SimilarityStrategy>().map_err(AppError::Config)?,
            None => SimilarityStrategy::default(),
        };

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            max_results,
            similarity,
            tcp_listen_addr: lookup("MCP_TCP_LISTEN_ADDR").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            max_results: self.max_results,
            similarity: self.similarity,
        }
    }
}
