use serde::{Deserialize, Serialize};
use crate::models::domain::Job;

/// Result of comparing a candidate's skills against a job's requirements
///
/// `needs_skills` is set only when the candidate has no recorded skills at
/// all. A candidate with skills but zero overlap still gets a 0% match with
/// `needs_skills: false` — callers must check the flag rather than infer it
/// from the percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "needsSkills")]
    pub needs_skills: bool,
}

/// Feed entry: a job with its match data and priority score merged in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: Job,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "opportunityScore")]
    pub opportunity_score: f64,
}

/// Personalized feed output
///
/// A candidate with no recorded skills gets the first active postings
/// unranked — there is nothing to score against. The untagged representation
/// keeps both wire shapes the service layer already serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonalizedFeed {
    Ranked(Vec<ScoredJob>),
    NeedsSkills(Vec<Job>),
}

impl PersonalizedFeed {
    pub fn len(&self) -> usize {
        match self {
            PersonalizedFeed::Ranked(entries) => entries.len(),
            PersonalizedFeed::NeedsSkills(jobs) => jobs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, PersonalizedFeed::Ranked(_))
    }
}

/// An expired, high-match job the candidate never applied to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissedOpportunity {
    pub job: Job,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Application strategy metrics
///
/// Applications whose job can no longer be resolved count toward `total`
/// but join neither bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub total: usize,
    #[serde(rename = "highMatch")]
    pub high_match: usize,
    #[serde(rename = "lowMatch")]
    pub low_match: usize,
    #[serde(rename = "highMatchPercent")]
    pub high_match_percent: u8,
    pub suggestion: String,
    pub rating: StrategyRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyRating {
    None,
    Excellent,
    Good,
    NeedsImprovement,
}

/// Direction of a readiness score change between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Readiness trend between the current and a previous score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub direction: TrendDirection,
    pub delta: i16,
}

impl std::fmt::Display for TrendIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.delta > 0 {
            write!(f, "+{}%", self.delta)
        } else {
            write!(f, "{}%", self.delta)
        }
    }
}
