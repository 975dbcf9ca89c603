use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::{PerformanceReport, SignalResult};

/// One planning run's worth of upstream output, as dumped by the
/// analysis/sentiment collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub signals: Vec<SignalResult>,
    #[serde(default)]
    pub sector_scores: HashMap<String, f64>,
    #[serde(default = "default_regime")]
    pub regime: String,
    #[serde(default)]
    pub performance: Option<PerformanceReport>,
    /// Overrides the configured capital when present.
    #[serde(default)]
    pub total_capital: Option<f64>,
}

fn default_regime() -> String {
    "NEUTRAL".to_string()
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load(path: &Path) -> Result<PlanRequest, SnapshotError> {
    let raw = std::fs::read_to_string(path)?;
    let request = serde_json::from_str(&raw)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_snapshot_parses_with_defaults() {
        let raw = r#"{"signals": [{"ticker": "GARAN", "score": 70, "current_price": 100}]}"#;
        let req: PlanRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.regime, "NEUTRAL");
        assert!(req.sector_scores.is_empty());
        assert!(req.performance.is_none());
        assert_eq!(req.signals.len(), 1);
        assert!(!req.signals[0].skip);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("plan_snapshot_{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let err = load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }
}
