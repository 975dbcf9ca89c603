pub mod allocation;
pub mod candidate;
pub mod regime;
pub mod signal;

pub use allocation::{
    AllocationResult, PerformanceReport, PositionAllocation, PositionSizing, SystemStrength,
};
pub use candidate::{Candidate, Rating, Recommendation};
pub use regime::{MarketRegime, RiskLevel};
pub use signal::{BreakoutInfo, SignalResult, SignalStat, SignalStats};
