//! SkillSync Engine - opportunity matching and prioritization for the
//! SkillSync job board
//!
//! This library provides the scoring formulas shared by the SkillSync REST
//! service and its client-side preview mode: skill matching, opportunity
//! priority scores, placement readiness, application-strategy metrics, and
//! missed-opportunity detection. Every operation is a pure function of its
//! inputs; the caller supplies the job/application collections and the
//! current time.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::config::{Settings, SettingsError};
pub use crate::core::{
    analyze_strategy, match_skills, readiness_score, readiness_trend, score_opportunity,
    Recommender, DEFAULT_FEED_LIMIT, DEFAULT_SALARY_THRESHOLD, HIGH_MATCH_CUTOFF, MAX_FEED_LIMIT,
};
pub use crate::models::{
    Application, ApplicationStatus, Job, JobType, MissedOpportunity, PersonalizedFeed, ScoredJob,
    SkillMatch, StrategyRating, StrategyReport, TrendDirection, TrendIndicator,
};
