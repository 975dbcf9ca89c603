use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticker that survived filtering, scored and levelled by the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub ticker: String,
    pub sector: String,
    /// Composite score (technical blended with sector sentiment).
    pub score: f64,
    pub current_price: f64,
    pub support: f64,
    pub resistance: f64,
    pub reward_pct: f64,
    pub risk_pct: f64,
    pub reward_risk_ratio: f64,
    pub source_pool: String,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub volatility: f64,
    #[serde(default)]
    pub atr: f64,
    #[serde(default)]
    pub alpha_vs_benchmark: f64,
}

/// Ordinal label assigned to a recommendation from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    StrongBuy,
    Buy,
    Hold,
    Watch,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::StrongBuy => write!(f, "STRONG_BUY"),
            Rating::Buy => write!(f, "BUY"),
            Rating::Hold => write!(f, "HOLD"),
            Rating::Watch => write!(f, "WATCH"),
        }
    }
}

/// Terminal output of the selector stage, input to the allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    #[serde(default)]
    pub sector: String,
    pub rating: Rating,
    #[serde(default = "default_final_score")]
    pub final_score: f64,
    /// Snapshot price at selection time.
    #[serde(default)]
    pub price: f64,
    /// Confirmed entry; zero until an orchestrator fills it, in which
    /// case the allocator falls back to `price`.
    #[serde(default)]
    pub entry_price: f64,
    #[serde(default)]
    pub support: f64,
    #[serde(default)]
    pub resistance: f64,
    #[serde(default)]
    pub reward_risk_ratio: f64,
    #[serde(default)]
    pub source_pool: String,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub volatility: f64,
    #[serde(default)]
    pub atr: f64,
    #[serde(default)]
    pub alpha_vs_benchmark: f64,
}

fn default_final_score() -> f64 {
    50.0
}
