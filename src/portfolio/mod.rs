pub mod allocator;
pub mod confidence;
pub mod sizing;
pub mod strength;

pub use allocator::PortfolioAllocator;
pub use confidence::confidence_score;
pub use sizing::PositionSizer;
pub use strength::system_strength;
