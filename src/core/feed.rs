use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::matching::match_skills;
use crate::core::scoring::{score_opportunity, DEFAULT_SALARY_THRESHOLD, HIGH_MATCH_CUTOFF};
use crate::models::{Application, Job, MissedOpportunity, PersonalizedFeed, ScoredJob};

/// Default number of feed entries returned to callers
pub const DEFAULT_FEED_LIMIT: usize = 5;

/// Upper bound callers should cap their requested limit at
pub const MAX_FEED_LIMIT: usize = 50;

/// Opportunity feed builder
///
/// Filters a job collection to active (non-expired) postings, scores and
/// ranks them per candidate, and detects missed opportunities. Every
/// operation is a pure function of its inputs; the struct only carries the
/// salary threshold the priority formula is parameterized on.
#[derive(Debug, Clone)]
pub struct Recommender {
    salary_threshold: f64,
}

impl Recommender {
    pub fn new(salary_threshold: f64) -> Self {
        Self { salary_threshold }
    }

    pub fn with_default_threshold() -> Self {
        Self {
            salary_threshold: DEFAULT_SALARY_THRESHOLD,
        }
    }

    /// Build the top-N personalized feed for a candidate
    ///
    /// Only jobs whose deadline is still ahead of `now` are considered. With
    /// an empty candidate skill list there is nothing to rank against, so the
    /// first `limit` active jobs come back unscored. Otherwise every active
    /// job is scored, ranked descending by opportunity score (stable: ties
    /// keep their input order) and cut to `limit`.
    pub fn top_opportunities(
        &self,
        jobs: &[Job],
        candidate_skills: &[String],
        now: DateTime<Utc>,
        limit: usize,
    ) -> PersonalizedFeed {
        let active: Vec<&Job> = jobs.iter().filter(|job| job.deadline > now).collect();

        tracing::debug!(
            "{} of {} jobs are still accepting applications",
            active.len(),
            jobs.len()
        );

        if candidate_skills.is_empty() {
            return PersonalizedFeed::NeedsSkills(
                active.into_iter().take(limit).cloned().collect(),
            );
        }

        let mut scored: Vec<ScoredJob> = active
            .into_iter()
            .map(|job| {
                let skill_match = match_skills(candidate_skills, &job.skills_required);
                let opportunity_score =
                    score_opportunity(job, candidate_skills, self.salary_threshold, now);

                ScoredJob {
                    job: job.clone(),
                    match_percentage: skill_match.match_percentage,
                    matched_skills: skill_match.matched_skills,
                    missing_skills: skill_match.missing_skills,
                    opportunity_score,
                }
            })
            .collect();

        // Vec::sort_by is stable, so equal scores retain input order
        scored.sort_by(|a, b| {
            b.opportunity_score
                .partial_cmp(&a.opportunity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        tracing::debug!("returning {} ranked opportunities", scored.len());

        PersonalizedFeed::Ranked(scored)
    }

    /// Find expired, high-match jobs the candidate never applied to
    ///
    /// Output keeps the input job order; no limit or sort is applied.
    pub fn missed_opportunities(
        &self,
        jobs: &[Job],
        applications: &[Application],
        candidate_skills: &[String],
        now: DateTime<Utc>,
    ) -> Vec<MissedOpportunity> {
        let applied: HashSet<&str> = applications.iter().map(|a| a.job_id.as_str()).collect();

        let missed: Vec<MissedOpportunity> = jobs
            .iter()
            .filter(|job| job.deadline < now && !applied.contains(job.id.as_str()))
            .filter_map(|job| {
                let skill_match = match_skills(candidate_skills, &job.skills_required);
                if skill_match.match_percentage >= HIGH_MATCH_CUTOFF {
                    Some(MissedOpportunity {
                        job: job.clone(),
                        match_percentage: skill_match.match_percentage,
                        matched_skills: skill_match.matched_skills,
                        missing_skills: skill_match.missing_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        tracing::debug!("{} missed opportunities detected", missed.len());

        missed
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_threshold()
    }
}
