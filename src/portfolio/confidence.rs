use crate::models::{Recommendation, SignalStats};

/// Volatility assumed when the record carries none. A supplied zero is
/// treated the same as missing, by the upstream "or 5" convention.
const DEFAULT_VOLATILITY: f64 = 5.0;

/// Blend score, historical signal reliability, alpha and volatility into
/// a single allocation-weight basis. Total over its inputs: missing or
/// zero optional fields fall back to their defaults, never panics.
pub fn confidence_score(rec: &Recommendation, stats: Option<&SignalStats>) -> f64 {
    let win_rate_weight = match stats {
        Some(stats) => {
            let matched: Vec<f64> = rec
                .signals
                .iter()
                .filter_map(|name| stats.get(name))
                .map(|s| s.win_rate / 100.0)
                .collect();
            if matched.is_empty() {
                1.0
            } else {
                matched.iter().sum::<f64>() / matched.len() as f64
            }
        }
        None => 1.0,
    };

    let volatility = if rec.volatility == 0.0 {
        DEFAULT_VOLATILITY
    } else {
        rec.volatility
    };

    let confidence =
        rec.final_score * win_rate_weight * (1.0 + rec.alpha_vs_benchmark / 100.0) / volatility;

    round2(confidence)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
