use crate::models::PositionSizing;

/// Stop distance as a multiple of ATR.
const ATR_STOP_MULT: f64 = 1.5;

/// Sizes positions so the dollar loss at the stop is a fixed fraction of
/// total capital, regardless of the instrument's volatility.
#[derive(Debug, Clone, Copy)]
pub struct PositionSizer {
    pub total_capital: f64,
    pub max_risk_per_trade: f64,
}

impl PositionSizer {
    pub fn new(total_capital: f64, max_risk_per_trade: f64) -> Self {
        Self {
            total_capital,
            max_risk_per_trade,
        }
    }

    /// A non-positive risk-per-share (degenerate ATR) is a defined
    /// zero-size outcome, not an error.
    pub fn size(&self, entry_price: f64, atr: f64) -> PositionSizing {
        let stop_price = round2(entry_price - ATR_STOP_MULT * atr);
        let risk_per_share = entry_price - stop_price;

        if risk_per_share <= 0.0 {
            return PositionSizing {
                shares: 0,
                stop_price,
            };
        }

        let capital_risk = self.total_capital * self.max_risk_per_trade;
        let shares = (capital_risk / risk_per_share).floor().max(0.0) as u64;

        PositionSizing { shares, stop_price }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
