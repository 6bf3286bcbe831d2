use std::collections::HashMap;

use crate::core::matching::match_skills;
use crate::core::scoring::HIGH_MATCH_CUTOFF;
use crate::models::{Application, Job, StrategyRating, StrategyReport};

const EXCELLENT_CUTOFF: u8 = 70;
const GOOD_CUTOFF: u8 = 40;

const EMPTY_STATE_SUGGESTION: &str = "Start applying to opportunities to track your strategy.";
const EXCELLENT_SUGGESTION: &str = "Excellent strategy! You're focusing on high-match roles.";
const GOOD_SUGGESTION: &str =
    "Good balance. Try to increase high-match applications for better results.";
const NEEDS_IMPROVEMENT_SUGGESTION: &str =
    "You're applying mostly to low-match roles. Focus on 60%+ match jobs for better outcomes.";

/// Classify a candidate's application history into high-match and low-match
/// buckets and rate the overall strategy
///
/// An application counts as high-match when its job scores at least 60%
/// against the candidate's skills. Applications whose job cannot be resolved
/// from `jobs` stay in `total` but join neither bucket.
pub fn analyze_strategy(
    applications: &[Application],
    candidate_skills: &[String],
    jobs: &[Job],
) -> StrategyReport {
    if applications.is_empty() {
        return StrategyReport {
            total: 0,
            high_match: 0,
            low_match: 0,
            high_match_percent: 0,
            suggestion: EMPTY_STATE_SUGGESTION.to_string(),
            rating: StrategyRating::None,
        };
    }

    let jobs_by_id: HashMap<&str, &Job> = jobs.iter().map(|j| (j.id.as_str(), j)).collect();

    let mut high_match = 0;
    let mut low_match = 0;

    for application in applications {
        if let Some(job) = jobs_by_id.get(application.job_id.as_str()) {
            let percentage =
                match_skills(candidate_skills, &job.skills_required).match_percentage;
            if percentage >= HIGH_MATCH_CUTOFF {
                high_match += 1;
            } else {
                low_match += 1;
            }
        }
    }

    let high_match_percent =
        ((high_match as f64 / applications.len() as f64) * 100.0).round() as u8;

    let (suggestion, rating) = if high_match_percent >= EXCELLENT_CUTOFF {
        (EXCELLENT_SUGGESTION, StrategyRating::Excellent)
    } else if high_match_percent >= GOOD_CUTOFF {
        (GOOD_SUGGESTION, StrategyRating::Good)
    } else {
        (NEEDS_IMPROVEMENT_SUGGESTION, StrategyRating::NeedsImprovement)
    };

    StrategyReport {
        total: applications.len(),
        high_match,
        low_match,
        high_match_percent,
        suggestion: suggestion.to_string(),
        rating,
    }
}
