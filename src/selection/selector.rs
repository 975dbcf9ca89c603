use std::collections::HashMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Candidate, Recommendation, SignalResult};
use crate::selection::scoring::{
    BlendedComposite, CompositeScore, DefaultRatings, LevelRewardRisk, RatingThresholds,
    RewardRisk,
};

// Fallback levels when no Fibonacci retracement is available.
const SUPPORT_FALLBACK: f64 = 0.93;
const RESISTANCE_FALLBACK: f64 = 1.08;

// Ranking blend: absolute score dominates, reward/risk adds a bonus.
const RANK_SCORE_WEIGHT: f64 = 0.5;
const RANK_RATIO_WEIGHT: f64 = 0.3;
const RANK_RATIO_SCALE: f64 = 10.0;

/// Sentiment assumed for sectors absent from the sentiment mapping.
const NEUTRAL_SENTIMENT: f64 = 50.0;

/// Filters, scores and ranks raw signal results into candidates.
///
/// Sector classification and the three scoring strategies are injected so
/// the selector stays free of ambient lookups.
pub struct CandidateSelector {
    sector_table: HashMap<String, String>,
    default_sector: String,
    max_recommendations: usize,
    composite: Box<dyn CompositeScore + Send + Sync>,
    reward_risk: Box<dyn RewardRisk + Send + Sync>,
    ratings: Box<dyn RatingThresholds + Send + Sync>,
}

impl CandidateSelector {
    pub fn new(cfg: &Config) -> Self {
        Self::with_strategies(
            cfg,
            Box::new(BlendedComposite),
            Box::new(LevelRewardRisk),
            Box::new(DefaultRatings),
        )
    }

    pub fn with_strategies(
        cfg: &Config,
        composite: Box<dyn CompositeScore + Send + Sync>,
        reward_risk: Box<dyn RewardRisk + Send + Sync>,
        ratings: Box<dyn RatingThresholds + Send + Sync>,
    ) -> Self {
        Self {
            sector_table: cfg.sector_table.clone(),
            default_sector: cfg.default_sector.clone(),
            max_recommendations: cfg.max_recommendations,
            composite,
            reward_risk,
            ratings,
        }
    }

    /// Filter, score, rank and truncate. Output is a strict prefix of the
    /// ranked candidate list, never longer than `max_count` and never
    /// containing a skipped ticker. Ties keep input order.
    pub fn select_candidates(
        &self,
        results: &[SignalResult],
        sector_scores: &HashMap<String, f64>,
        max_count: Option<usize>,
    ) -> Vec<Candidate> {
        let limit = max_count.unwrap_or(self.max_recommendations);

        let mut candidates: Vec<Candidate> = Vec::new();
        for result in results {
            if result.skip {
                debug!("Skipping {} (flagged by upstream)", result.ticker);
                continue;
            }
            candidates.push(self.build_candidate(result, sector_scores));
        }

        candidates.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
        candidates.truncate(limit);

        info!(
            "Selected {} candidate(s) from {} signal result(s)",
            candidates.len(),
            results.len()
        );

        candidates
    }

    /// Project ranked candidates into display-ready recommendations.
    /// Pure projection: no filtering, no reordering. The sentiment mapping
    /// is accepted for signature parity with the selection call.
    pub fn recommendations(
        &self,
        candidates: &[Candidate],
        _sector_scores: &HashMap<String, f64>,
    ) -> Vec<Recommendation> {
        candidates
            .iter()
            .map(|c| Recommendation {
                ticker: c.ticker.clone(),
                sector: c.sector.clone(),
                rating: self.ratings.rating(c.score),
                final_score: c.score,
                price: c.current_price,
                entry_price: 0.0,
                support: c.support,
                resistance: c.resistance,
                reward_risk_ratio: round2(c.reward_risk_ratio),
                source_pool: c.source_pool.clone(),
                signals: c.signals.clone(),
                volatility: c.volatility,
                atr: c.atr,
                alpha_vs_benchmark: c.alpha_vs_benchmark,
            })
            .collect()
    }

    fn build_candidate(
        &self,
        result: &SignalResult,
        sector_scores: &HashMap<String, f64>,
    ) -> Candidate {
        let sector = self
            .sector_table
            .get(&result.ticker)
            .cloned()
            .unwrap_or_else(|| self.default_sector.clone());

        let sentiment = sector_scores
            .get(&sector)
            .copied()
            .unwrap_or(NEUTRAL_SENTIMENT);

        let score = self.composite.composite(result.score, sentiment);

        let price = result.current_price;
        let support = result
            .fibonacci
            .get("0.618")
            .copied()
            .unwrap_or(price * SUPPORT_FALLBACK);
        let resistance = result
            .fibonacci
            .get("0.236")
            .copied()
            .unwrap_or(price * RESISTANCE_FALLBACK);

        let rr = self.reward_risk.reward_risk(price, support, resistance);

        Candidate {
            ticker: result.ticker.clone(),
            sector,
            score,
            current_price: price,
            support,
            resistance,
            reward_pct: rr.reward_pct,
            risk_pct: rr.risk_pct,
            reward_risk_ratio: rr.ratio,
            source_pool: result.source_pool.clone(),
            signals: result.signals.clone(),
            volatility: result.volatility,
            atr: result.atr,
            alpha_vs_benchmark: result.alpha_vs_benchmark,
        }
    }
}

fn rank_key(c: &Candidate) -> f64 {
    c.score * RANK_SCORE_WEIGHT + c.reward_risk_ratio * RANK_RATIO_SCALE * RANK_RATIO_WEIGHT
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use crate::test_helpers::{make_signal, test_config};

    fn selector() -> CandidateSelector {
        CandidateSelector::new(&test_config())
    }

    fn no_sentiment() -> HashMap<String, f64> {
        HashMap::new()
    }

    #[test]
    fn skipped_results_never_selected() {
        let mut skipped = make_signal("GARAN", 95.0, 100.0);
        skipped.skip = true;
        let results = vec![skipped, make_signal("ASELS", 60.0, 50.0)];

        let out = selector().select_candidates(&results, &no_sentiment(), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].ticker, "ASELS");
    }

    #[test]
    fn output_is_truncated_to_max_count() {
        let results: Vec<_> = (0..10)
            .map(|i| make_signal(&format!("T{i}"), 50.0 + i as f64, 100.0))
            .collect();

        let out = selector().select_candidates(&results, &no_sentiment(), Some(3));
        assert_eq!(out.len(), 3);
        // Highest scores first
        assert_eq!(out[0].ticker, "T9");
        assert_eq!(out[1].ticker, "T8");
        assert_eq!(out[2].ticker, "T7");
    }

    #[test]
    fn output_length_is_min_of_limit_and_survivors() {
        let results = vec![
            make_signal("A", 60.0, 100.0),
            make_signal("B", 70.0, 100.0),
        ];
        let out = selector().select_candidates(&results, &no_sentiment(), Some(5));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn ranking_blends_score_and_reward_risk() {
        // Same technical score; B gets a much better reward/risk profile
        // through its Fibonacci levels, so it must rank first.
        let a = make_signal("A", 70.0, 100.0);
        let mut b = make_signal("B", 70.0, 100.0);
        b.fibonacci.insert("0.618".to_string(), 99.0);
        b.fibonacci.insert("0.236".to_string(), 112.0);

        let out = selector().select_candidates(&[a, b], &no_sentiment(), None);
        assert_eq!(out[0].ticker, "B");
    }

    #[test]
    fn nan_score_does_not_panic_the_ranking() {
        let poisoned = make_signal("NAN", f64::NAN, 100.0);
        let results = vec![poisoned, make_signal("CLEAN", 70.0, 100.0)];

        let out = selector().select_candidates(&results, &no_sentiment(), None);
        assert_eq!(out.len(), 2);
        assert!(out.iter().any(|c| c.ticker == "CLEAN"));
    }

    #[test]
    fn ties_keep_input_order() {
        let results = vec![
            make_signal("FIRST", 70.0, 100.0),
            make_signal("SECOND", 70.0, 100.0),
        ];
        let out = selector().select_candidates(&results, &no_sentiment(), None);
        assert_eq!(out[0].ticker, "FIRST");
        assert_eq!(out[1].ticker, "SECOND");
    }

    #[test]
    fn fallback_levels_without_fibonacci() {
        let results = vec![make_signal("A", 70.0, 100.0)];
        let out = selector().select_candidates(&results, &no_sentiment(), None);
        assert!((out[0].support - 93.0).abs() < 1e-9);
        assert!((out[0].resistance - 108.0).abs() < 1e-9);
    }

    #[test]
    fn fibonacci_levels_take_precedence() {
        let mut s = make_signal("A", 70.0, 100.0);
        s.fibonacci.insert("0.618".to_string(), 95.5);
        s.fibonacci.insert("0.236".to_string(), 104.5);
        let out = selector().select_candidates(&[s], &no_sentiment(), None);
        assert!((out[0].support - 95.5).abs() < 1e-9);
        assert!((out[0].resistance - 104.5).abs() < 1e-9);
    }

    #[test]
    fn sector_resolution_uses_table_then_default() {
        let cfg = test_config();
        let out = selector().select_candidates(
            &[
                make_signal("GARAN", 70.0, 100.0),
                make_signal("UNKNOWN", 70.0, 100.0),
            ],
            &no_sentiment(),
            None,
        );
        let garan = out.iter().find(|c| c.ticker == "GARAN").unwrap();
        let unknown = out.iter().find(|c| c.ticker == "UNKNOWN").unwrap();
        assert_eq!(garan.sector, "finans");
        assert_eq!(unknown.sector, cfg.default_sector);
    }

    #[test]
    fn sector_sentiment_moves_the_composite() {
        let mut strong = HashMap::new();
        strong.insert("finans".to_string(), 90.0);
        let mut weak = HashMap::new();
        weak.insert("finans".to_string(), 10.0);

        let s = selector();
        let hi = s.select_candidates(&[make_signal("GARAN", 70.0, 100.0)], &strong, None);
        let lo = s.select_candidates(&[make_signal("GARAN", 70.0, 100.0)], &weak, None);
        assert!(hi[0].score > lo[0].score);
    }

    #[test]
    fn recommendations_preserve_order_and_round_ratio() {
        let mut s = make_signal("A", 85.0, 100.0);
        s.fibonacci.insert("0.618".to_string(), 93.0);
        s.fibonacci.insert("0.236".to_string(), 108.0);
        let results = vec![s, make_signal("B", 40.0, 50.0)];

        let sel = selector();
        let candidates = sel.select_candidates(&results, &no_sentiment(), None);
        let recs = sel.recommendations(&candidates, &no_sentiment());

        assert_eq!(recs.len(), candidates.len());
        for (r, c) in recs.iter().zip(candidates.iter()) {
            assert_eq!(r.ticker, c.ticker);
            assert_eq!(r.final_score, c.score);
        }
        // 8/7 = 1.142857... rounds to 1.14
        assert!((recs[0].reward_risk_ratio - 1.14).abs() < 1e-9);
    }

    #[test]
    fn recommendation_ratings_follow_score_bands() {
        // Composite with neutral sentiment: 95*0.7 + 50*0.3 = 81.5 -> StrongBuy
        let results = vec![make_signal("A", 95.0, 100.0)];
        let sel = selector();
        let candidates = sel.select_candidates(&results, &no_sentiment(), None);
        let recs = sel.recommendations(&candidates, &no_sentiment());
        assert_eq!(recs[0].rating, Rating::StrongBuy);
    }
}
