/// The immutable solution catalog and its query surface.
///
/// A catalog is built once from a JSON array of records and never mutated.
/// Records that fail to deserialize are skipped with a warning; only a missing
/// file or a top-level document that is not an array fails the whole load.
use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::CoreError;
use crate::model::SolutionRecord;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<SolutionRecord>,
}

/// Counts over the catalog, keyed in sorted order for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStatistics {
    pub total: usize,
    pub categories: BTreeMap<String, usize>,
    pub complexities: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from already-typed records, filling in missing ids.
    pub fn from_records(records: Vec<SolutionRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                if record.id.trim().is_empty() {
                    record.id = slugify(&record.name);
                }
                record
            })
            .collect();
        Self { records }
    }

    /// Read and parse a catalog file.
    ///
    /// A failed reload keeps the current catalog; startup goes through
    /// [`Catalog::load_or_empty`] instead.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content).map_err(|source| CoreError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog at `path`, or serve an empty one if it cannot be read
    /// or parsed.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "catalog unavailable, starting with an empty catalog");
                Self::empty()
            }
        }
    }

    /// Parse catalog JSON. Individual malformed records are skipped.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(content)?;
        let mut records = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<SolutionRecord>(value) {
                Ok(record) => records.push(record),
                Err(e) => warn!(index, error = %e, "skipping malformed catalog record"),
            }
        }
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order.
    pub fn all(&self) -> &[SolutionRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&SolutionRecord> {
        let id = id.trim();
        self.records.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    pub fn by_category(&self, category: &str) -> Vec<&SolutionRecord> {
        let category = category.trim();
        self.records
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Records carrying any of `keywords` (case-insensitive, exact keyword match).
    pub fn by_keywords(&self, keywords: &[String]) -> Vec<&SolutionRecord> {
        let wanted: Vec<String> = keywords.iter().map(|k| k.trim().to_lowercase()).collect();
        self.records
            .iter()
            .filter(|r| {
                r.keywords
                    .iter()
                    .any(|k| wanted.contains(&k.to_lowercase()))
            })
            .collect()
    }

    /// Case-insensitive substring search over name, description, keywords and
    /// addressed pain points. Each record appears at most once.
    pub fn search(&self, query: &str) -> Vec<&SolutionRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let contains = |text: &str| text.to_lowercase().contains(&query);
        self.records
            .iter()
            .filter(|r| {
                contains(&r.name)
                    || contains(&r.description)
                    || r.keywords.iter().any(|k| contains(k))
                    || r.pain_points.iter().any(|p| contains(p))
            })
            .collect()
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        seen
    }

    pub fn statistics(&self) -> CatalogStatistics {
        let mut stats = CatalogStatistics {
            total: self.records.len(),
            ..Default::default()
        };
        for record in &self.records {
            let category = if record.category.is_empty() {
                "unknown".to_string()
            } else {
                record.category.clone()
            };
            *stats.categories.entry(category).or_insert(0) += 1;
            *stats
                .complexities
                .entry(record.complexity.as_str().to_string())
                .or_insert(0) += 1;
        }
        stats
    }
}

fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_sep = false;
    for ch in s.chars() {
        let lc = ch.to_ascii_lowercase();
        if lc.is_ascii_alphanumeric() {
            out.push(lc);
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}
