pub mod scoring;
pub mod selector;

pub use scoring::{
    BlendedComposite, CompositeScore, DefaultRatings, LevelRewardRisk, RatingThresholds,
    RewardRisk, RewardRiskProfile,
};
pub use selector::CandidateSelector;
