//! # Mix Optimizer
//!
//! 組合優化模組（枚舉、評分、排名）

pub mod enumeration;
pub mod optimizer;
pub mod ranking;
pub mod scoring;

// Re-export 主要類型
pub use enumeration::{CombinationEnumerator, EnumerationStats, SearchBounds};
pub use optimizer::{MixOptimizer, INFEASIBLE_MESSAGE};
pub use scoring::ScoreKey;
