use serde::{Deserialize, Serialize};

use crate::models::Rating;

/// Reward and risk between current price and the nearest levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardRiskProfile {
    pub reward_pct: f64,
    pub risk_pct: f64,
    pub ratio: f64,
}

/// Blends a 0-100 technical score with a sector sentiment value.
pub trait CompositeScore {
    fn composite(&self, technical: f64, sentiment: f64) -> f64;
}

/// Computes the reward/risk profile from price and support/resistance.
pub trait RewardRisk {
    fn reward_risk(&self, price: f64, support: f64, resistance: f64) -> RewardRiskProfile;
}

/// Maps a composite score to an ordinal rating label.
pub trait RatingThresholds {
    fn rating(&self, score: f64) -> Rating;
}

/// Default composite: technical-weighted linear blend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendedComposite;

impl CompositeScore for BlendedComposite {
    fn composite(&self, technical: f64, sentiment: f64) -> f64 {
        technical * 0.7 + sentiment * 0.3
    }
}

/// Default reward/risk: percentage distance to resistance over distance
/// to support. Degenerate levels (support at or above price) give ratio 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelRewardRisk;

impl RewardRisk for LevelRewardRisk {
    fn reward_risk(&self, price: f64, support: f64, resistance: f64) -> RewardRiskProfile {
        if price <= 0.0 {
            return RewardRiskProfile {
                reward_pct: 0.0,
                risk_pct: 0.0,
                ratio: 0.0,
            };
        }

        let reward_pct = (resistance - price) / price * 100.0;
        let risk_pct = (price - support) / price * 100.0;
        let ratio = if risk_pct > 0.0 {
            reward_pct / risk_pct
        } else {
            0.0
        };

        RewardRiskProfile {
            reward_pct,
            risk_pct,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRatings;

impl RatingThresholds for DefaultRatings {
    fn rating(&self, score: f64) -> Rating {
        if score >= 80.0 {
            Rating::StrongBuy
        } else if score >= 65.0 {
            Rating::Buy
        } else if score >= 50.0 {
            Rating::Hold
        } else {
            Rating::Watch
        }
    }
}
