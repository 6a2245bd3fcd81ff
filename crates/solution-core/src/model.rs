use serde::{Deserialize, Serialize};

/// Fallback impact text when a record lists no success metrics.
const DEFAULT_IMPACT: &str = "Improve efficiency and customer satisfaction";
/// Fallback capability named in `how_it_helps` when a record lists none.
const DEFAULT_CAPABILITY: &str = "automation";

/// A single catalog entry describing one candidate capability.
///
/// Field names on the wire follow the catalog file format (`feature_id`,
/// `feature_name`, `pain_points_addressed`, ...). Only `feature_name`,
/// `category`, `description` and `keywords` are required; everything else
/// defaults to an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Stable identifier, e.g. "automated_responses". Derived from the name when absent.
    #[serde(rename = "feature_id", alias = "id", default)]
    pub id: String,
    /// Display name, e.g. "AI Customer Service Agent"
    #[serde(rename = "feature_name", alias = "name")]
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub description: String,
    /// Keyword set; order carries no meaning.
    pub keywords: Vec<String>,
    /// Pain-point phrasings this record is known to address.
    #[serde(rename = "pain_points_addressed", alias = "pain_points", default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(rename = "implementation_complexity", alias = "complexity", default)]
    pub complexity: Complexity,
    /// Free-text bucket such as "1-2 weeks".
    #[serde(default)]
    pub time_to_value: String,
    #[serde(default)]
    pub integration_requirements: Vec<String>,
    #[serde(default)]
    pub success_metrics: Vec<String>,
    #[serde(default)]
    pub key_capabilities: Vec<String>,
}

impl SolutionRecord {
    /// "<category> - <subcategory>", the label shown to callers.
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category, self.subcategory)
    }
}

/// Implementation effort of a solution record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Complexity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for Complexity {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Complexity> for String {
    fn from(value: Complexity) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    #[default]
    Unknown,
}

impl CompanySize {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    Low,
    Moderate,
    High,
    Flexible,
    #[default]
    Unknown,
}

impl Budget {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "flexible" => Self::Flexible,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Urgency {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

/// Caller-supplied situation used to adjust, never originate, candidate selection.
///
/// Every field is optional. Unrecognized or missing enumeration values become
/// `Unknown`, which matches no compatibility-table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessContext {
    /// Lowercased, trimmed industry. `None` when absent or blank.
    pub industry: Option<String>,
    pub company_size: CompanySize,
    pub budget: Budget,
    pub urgency: Urgency,
    /// Carried for callers; not used by scoring.
    pub customer_volume: Option<String>,
}

impl BusinessContext {
    /// Builds a context from loosely typed wire values.
    pub fn from_parts(
        industry: Option<&str>,
        company_size: Option<&str>,
        budget: Option<&str>,
        urgency: Option<&str>,
        customer_volume: Option<&str>,
    ) -> Self {
        Self {
            industry: industry
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
            company_size: company_size.map(CompanySize::parse).unwrap_or_default(),
            budget: budget.map(Budget::parse).unwrap_or_default(),
            urgency: urgency.map(Urgency::parse).unwrap_or_default(),
            customer_volume: customer_volume
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// A record that survived thresholding, with its rounded relevance.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSolution<'a> {
    pub record: &'a SolutionRecord,
    /// Relevance in [0, 1], rounded to two decimals.
    pub relevance: f64,
}

impl ScoredSolution<'_> {
    pub fn how_it_helps(&self) -> String {
        let addressed = &self.record.pain_points;
        if addressed.is_empty() {
            let capability = self
                .record
                .key_capabilities
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_CAPABILITY);
            format!("Provides {capability} to solve your issue")
        } else {
            let first_two: Vec<&str> = addressed.iter().take(2).map(String::as_str).collect();
            format!("Addresses: {}", first_two.join(", "))
        }
    }

    pub fn estimated_impact(&self) -> String {
        self.record
            .success_metrics
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_IMPACT.to_string())
    }
}

/// Ranked solutions for one request plus the overall confidence.
#[derive(Debug, Clone, Default)]
pub struct MatchResult<'a> {
    /// Relevance-descending; ties keep catalog order.
    pub solutions: Vec<ScoredSolution<'a>>,
    /// Confidence in [0, 1], unrounded.
    pub confidence: f64,
}
