use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Share count and protective stop for a single position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionSizing {
    pub shares: u64,
    pub stop_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionAllocation {
    pub ticker: String,
    /// Share of investable capital, 0-100.
    pub weight_pct: f64,
    pub allocation_amount: f64,
    pub shares: u64,
    pub entry_price: f64,
    pub stop_price: f64,
    pub confidence: f64,
}

/// One allocation run: cash split plus per-ticker positions in input order.
/// `cash_amount + sum(allocation_amount)` equals total capital within rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    pub cash_ratio_pct: f64,
    pub cash_amount: f64,
    pub positions: Vec<PositionAllocation>,
    pub generated_at: DateTime<Utc>,
}

/// Rollup of historical trade outcomes from the trade-history tracker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceReport {
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub avg_return_pct: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SystemStrength {
    /// 0-100 health score over historical performance.
    pub system_strength_score: f64,
    pub risk_level: RiskLevel,
}
