use std::collections::HashMap;

use trade_planner::config::Config;
use trade_planner::models::SignalResult;

pub fn test_config() -> Config {
    let mut cfg = Config::from_env();
    cfg.total_capital = 100_000.0;
    cfg.max_risk_per_trade = 0.02;
    cfg.max_recommendations = 5;
    cfg
}

pub fn signal(ticker: &str, score: f64, price: f64) -> SignalResult {
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
