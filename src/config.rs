use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Capital
    pub total_capital: f64,
    /// Fraction of total capital risked per trade (0.02 = 2%).
    pub max_risk_per_trade: f64,

    // Selection
    pub max_recommendations: usize,
    pub sector_table: HashMap<String, String>,
    pub default_sector: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let mut sector_table = HashMap::new();
        sector_table.insert("ASELS".to_string(), "teknoloji".to_string());
        sector_table.insert("LOGO".to_string(), "teknoloji".to_string());
        sector_table.insert("KAREL".to_string(), "teknoloji".to_string());
        sector_table.insert("GARAN".to_string(), "finans".to_string());
        sector_table.insert("AKBNK".to_string(), "finans".to_string());
        sector_table.insert("ISCTR".to_string(), "finans".to_string());
        sector_table.insert("YKBNK".to_string(), "finans".to_string());
        sector_table.insert("THYAO".to_string(), "ulastirma".to_string());
        sector_table.insert("PGSUS".to_string(), "ulastirma".to_string());
        sector_table.insert("EREGL".to_string(), "sanayi".to_string());
        sector_table.insert("TUPRS".to_string(), "enerji".to_string());
        sector_table.insert("BIMAS".to_string(), "perakende".to_string());

        Config {
            total_capital: env("TOTAL_CAPITAL", "100000")
                .parse()
                .unwrap_or(100_000.0),
            max_risk_per_trade: 0.02,
            max_recommendations: env("MAX_RECOMMENDATIONS", "5").parse().unwrap_or(5),
            sector_table,
            default_sector: env("DEFAULT_SECTOR", "teknoloji"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
