use crate::models::{PerformanceReport, RiskLevel, SystemStrength};

// Consistency vs magnitude blend. Average return carries a 4x multiplier
// because its numeric range is much smaller than the win rate's.
const WIN_RATE_WEIGHT: f64 = 0.6;
const AVG_RETURN_WEIGHT: f64 = 4.0;

const LOW_RISK_THRESHOLD: f64 = 75.0;
const MEDIUM_RISK_THRESHOLD: f64 = 50.0;

/// Collapse historical performance into a 0-100 health score and a
/// qualitative risk band.
pub fn system_strength(report: &PerformanceReport) -> SystemStrength {
    let raw = report.win_rate * WIN_RATE_WEIGHT + report.avg_return_pct * AVG_RETURN_WEIGHT;
    let score = round2(raw.clamp(0.0, 100.0));

    let risk_level = if score >= LOW_RISK_THRESHOLD {
        RiskLevel::Low
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    SystemStrength {
        system_strength_score: score,
        risk_level,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
