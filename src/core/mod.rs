// Core algorithm exports
pub mod feed;
pub mod matching;
mod normalize;
pub mod readiness;
pub mod scoring;
pub mod strategy;

pub use feed::{Recommender, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
pub use matching::match_skills;
pub use readiness::{readiness_score, readiness_trend};
pub use scoring::{score_opportunity, DEFAULT_SALARY_THRESHOLD, HIGH_MATCH_CUTOFF};
pub use strategy::analyze_strategy;
