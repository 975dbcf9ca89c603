use chrono::Utc;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{AllocationResult, MarketRegime, PositionAllocation, Recommendation};
use crate::portfolio::confidence::confidence_score;
use crate::portfolio::sizing::PositionSizer;

/// ATR fallback when neither `atr` nor `volatility` is supplied.
const DEFAULT_ATR: f64 = 5.0;

/// Splits capital into a regime-driven cash reserve and confidence-weighted
/// positions. Stateless across calls: the only fields are the fixed engine
/// parameters read at construction.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioAllocator {
    total_capital: f64,
    max_risk_per_trade: f64,
}

impl PortfolioAllocator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            total_capital: cfg.total_capital,
            max_risk_per_trade: cfg.max_risk_per_trade,
        }
    }

    pub fn allocate(
        &self,
        recommendations: &[Recommendation],
        regime: MarketRegime,
    ) -> AllocationResult {
        let cash_ratio = regime.cash_ratio();
        let investable_capital = self.total_capital * (1.0 - cash_ratio);

        let confidences: Vec<f64> = recommendations
            .iter()
            .map(|rec| confidence_score(rec, None))
            .collect();

        // Non-positive confidences stay in the output but contribute
        // nothing to the weight denominator.
        let total_confidence: f64 = confidences.iter().filter(|c| **c > 0.0).sum();

        let sizer = PositionSizer::new(self.total_capital, self.max_risk_per_trade);

        let positions: Vec<PositionAllocation> = recommendations
            .iter()
            .zip(confidences.iter())
            .map(|(rec, &conf)| {
                let weight = if total_confidence > 0.0 {
                    conf / total_confidence
                } else {
                    0.0
                };
                let allocation_amount = round2(investable_capital * weight);

                let atr = if rec.atr != 0.0 {
                    rec.atr
                } else if rec.volatility != 0.0 {
                    rec.volatility
                } else {
                    DEFAULT_ATR
                };
                let entry_price = if rec.entry_price != 0.0 {
                    rec.entry_price
                } else {
                    rec.price
                };

                let sizing = sizer.size(entry_price, atr);

                debug!(
                    "{}: confidence {:.2}, weight {:.2}%, {} share(s)",
                    rec.ticker,
                    conf,
                    weight * 100.0,
                    sizing.shares
                );

                PositionAllocation {
                    ticker: rec.ticker.clone(),
                    weight_pct: round2(weight * 100.0),
                    allocation_amount,
                    shares: sizing.shares,
                    entry_price,
                    stop_price: sizing.stop_price,
                    confidence: conf,
                }
            })
            .collect();

        info!(
            "Allocated {} position(s) under {} regime ({}% cash)",
            positions.len(),
            regime,
            round2(cash_ratio * 100.0)
        );

        AllocationResult {
            cash_ratio_pct: round2(cash_ratio * 100.0),
            cash_amount: round2(self.total_capital * cash_ratio),
            positions,
            generated_at: Utc::now(),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
