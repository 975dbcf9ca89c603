use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_planner::config::Config;
use trade_planner::models::MarketRegime;
use trade_planner::portfolio::{system_strength, PortfolioAllocator};
use trade_planner::selection::CandidateSelector;
use trade_planner::snapshot;

fn main() -> Result<()> {
    let mut cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path: PathBuf = match args.get(1) {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: trade-planner <snapshot.json>"),
    };

    let request = snapshot::load(&path)
        .with_context(|| format!("loading snapshot {}", path.display()))?;

    if let Some(capital) = request.total_capital {
        cfg.total_capital = capital;
    }

    let regime = MarketRegime::from_label(&request.regime);
    info!(
        "Planning {} signal(s) under {} regime with {:.2} capital",
        request.signals.len(),
        regime,
        cfg.total_capital
    );

    let selector = CandidateSelector::new(&cfg);
    let candidates =
        selector.select_candidates(&request.signals, &request.sector_scores, None);
    let recommendations = selector.recommendations(&candidates, &request.sector_scores);

    let allocator = PortfolioAllocator::new(&cfg);
    let allocation = allocator.allocate(&recommendations, regime);

    let strength = request.performance.as_ref().map(system_strength);

    let plan = serde_json::json!({
        "regime": regime,
        "recommendations": recommendations,
        "allocation": allocation,
        "system_strength": strength,
    });

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
