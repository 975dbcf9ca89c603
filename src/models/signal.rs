use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-ticker technical snapshot produced by the upstream analysis stage.
/// Extra JSON fields from the producer are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalResult {
    pub ticker: String,
    /// Technical score on a 0-100 scale.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub skip: bool,
    /// Named retracement level -> price, e.g. "0.618" -> 94.2.
    #[serde(default)]
    pub fibonacci: HashMap<String, f64>,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub momentum_pct: f64,
    #[serde(default)]
    pub breakout: Option<BreakoutInfo>,
    #[serde(default)]
    pub source_pool: String,
    /// Names of the signals that fired for this ticker.
    #[serde(default)]
    pub signals: Vec<String>,
    // Carried through to the allocator; zero means "not supplied".
    #[serde(default)]
    pub volatility: f64,
    #[serde(default)]
    pub atr: f64,
    #[serde(default)]
    pub alpha_vs_benchmark: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakoutInfo {
    #[serde(default)]
    pub triggered: bool,
    #[serde(default)]
    pub level: f64,
}

/// Historical reliability of a named signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalStat {
    /// Win rate as a percentage (0-100).
    pub win_rate: f64,
}

/// Signal name -> historical stats, produced by the trade-history tracker.
pub type SignalStats = HashMap<String, SignalStat>;
