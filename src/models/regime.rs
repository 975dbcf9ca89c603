use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete market-condition label driving the cash/invested split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketRegime {
    StrongBull,
    Bull,
    Neutral,
    Bear,
    Crisis,
}

impl MarketRegime {
    /// Total over any input: unrecognized labels map to the neutral posture.
    pub fn from_label(label: &str) -> Self {
        match label {
            "STRONG_BULL" => MarketRegime::StrongBull,
            "BULL" => MarketRegime::Bull,
            "NEUTRAL" => MarketRegime::Neutral,
            "BEAR" => MarketRegime::Bear,
            "CRISIS" => MarketRegime::Crisis,
            _ => MarketRegime::Neutral,
        }
    }

    /// Fraction of total capital held back as cash under this regime.
    pub fn cash_ratio(&self) -> f64 {
        match self {
            MarketRegime::StrongBull => 0.10,
            MarketRegime::Bull => 0.25,
            MarketRegime::Neutral => 0.50,
            MarketRegime::Bear => 0.70,
            MarketRegime::Crisis => 0.85,
        }
    }
}

impl fmt::Display for MarketRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketRegime::StrongBull => write!(f, "STRONG_BULL"),
            MarketRegime::Bull => write!(f, "BULL"),
            MarketRegime::Neutral => write!(f, "NEUTRAL"),
            MarketRegime::Bear => write!(f, "BEAR"),
            MarketRegime::Crisis => write!(f, "CRISIS"),
        }
    }
}

/// Qualitative banding of the system-strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}
