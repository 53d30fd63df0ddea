use crate::usecase::UseCase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the finalized use-case vector, exactly as it goes on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UseCaseWeight {
    pub name: UseCase,
    pub percentage: f64,
}

/// A candidate product spec sheet. Every field is optional on our side;
/// the backend owns coercion and defaulting of missing specs.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Headphone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_mics: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anc_strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_resistance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_size: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EvaluateRequest {
    pub use_cases: Vec<UseCaseWeight>,
    pub headphones: Vec<Headphone>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EvaluateAmazonRequest {
    pub use_cases: Vec<UseCaseWeight>,
    pub amazon_urls: Vec<String>,
}

/// One ranked product as returned by the backend. All secondary fields are
/// optional: the producing service is outside our control and older
/// responses omit the value ranking entirely.
///
/// `contributions` keeps JSON key order (IndexMap) so criteria with equal
/// shares display in the order the backend emitted them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RankedItem {
    pub model: String,
    pub score: f64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub value_score: Option<f64>,
    #[serde(default)]
    pub contributions: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub use_case_scores: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Explanation {
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EvaluationResponse {
    #[serde(default)]
    pub ranked_headphones: Vec<RankedItem>,
    #[serde(default)]
    pub value_ranked_headphones: Option<Vec<RankedItem>>,
    #[serde(default)]
    pub explanation: Option<Explanation>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
