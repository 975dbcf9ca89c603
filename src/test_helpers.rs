use std::collections::HashMap;

use crate::config::Config;
use crate::models::{Rating, Recommendation, SignalResult};

pub fn test_config() -> Config {
    let mut cfg = Config::from_env();
    cfg.total_capital = 100_000.0;
    cfg.max_risk_per_trade = 0.02;
    cfg.max_recommendations = 5;
    cfg.default_sector = "teknoloji".to_string();
    cfg
}

pub fn make_signal(ticker: &str, score: f64, price: f64) -> SignalResult {
    SignalResult {
        ticker: ticker.to_string(),
        score,
        skip: false,
        fibonacci: HashMap::new(),
        current_price: price,
        momentum_pct: 0.0,
        breakout: None,
        source_pool: "scan".to_string(),
        signals: Vec::new(),
        volatility: 0.0,
        atr: 0.0,
        alpha_vs_benchmark: 0.0,
    }
}

pub fn make_recommendation(ticker: &str, final_score: f64, price: f64) -> Recommendation {
    Recommendation {
        ticker: ticker.to_string(),
        sector: "teknoloji".to_string(),
        rating: Rating::Hold,
        final_score,
        price,
        entry_price: 0.0,
        support: price * 0.93,
        resistance: price * 1.08,
        reward_risk_ratio: 1.0,
        source_pool: "scan".to_string(),
        signals: Vec::new(),
        volatility: 0.0,
        atr: 0.0,
        alpha_vs_benchmark: 0.0,
    }
}
