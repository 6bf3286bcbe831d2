// Model exports
pub mod domain;
pub mod results;

pub use domain::{Application, ApplicationStatus, Job, JobType};
pub use results::{
    MissedOpportunity, PersonalizedFeed, ScoredJob, SkillMatch, StrategyRating, StrategyReport,
    TrendDirection, TrendIndicator,
};
