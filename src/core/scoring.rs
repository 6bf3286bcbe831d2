use chrono::{DateTime, Utc};

use crate::core::matching::match_skills;
use crate::models::{Job, JobType};

/// Default salary threshold for the salary bonus, in the same unit as
/// `Job::salary`
pub const DEFAULT_SALARY_THRESHOLD: f64 = 30_000.0;

/// Match percentage cutoff for "high-match" classification. The priority
/// bonus applies strictly above it; strategy and missed-opportunity
/// classification include it.
pub const HIGH_MATCH_CUTOFF: u8 = 60;

const MATCH_WEIGHT: f64 = 0.1;
const HIGH_MATCH_BONUS: f64 = 5.0;
const SALARY_BONUS: f64 = 3.0;
const REMOTE_BONUS: f64 = 2.0;
const RUNWAY_BONUS: f64 = 2.0;
const RUNWAY_DAYS: f64 = 7.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Calculate the opportunity priority score for a single job
///
/// Scoring formula:
/// score = match_percentage * 0.1      # 0-10 continuous
///       + 5 if match_percentage > 60
///       + 3 if salary >= threshold
///       + 2 if remote
///       + 2 if more than 7 days until the deadline
///
/// The fractional match term is what breaks ties: two jobs landing in the
/// same bonus tier still rank by match quality. Result is rounded to two
/// decimal places.
///
/// `now` is injected by the caller so scoring stays deterministic.
pub fn score_opportunity(
    job: &Job,
    candidate_skills: &[String],
    salary_threshold: f64,
    now: DateTime<Utc>,
) -> f64 {
    let match_percentage = match_skills(candidate_skills, &job.skills_required).match_percentage;

    let mut score = match_percentage as f64 * MATCH_WEIGHT;

    if match_percentage > HIGH_MATCH_CUTOFF {
        score += HIGH_MATCH_BONUS;
    }

    if job.salary >= salary_threshold {
        score += SALARY_BONUS;
    }

    if job.job_type == JobType::Remote {
        score += REMOTE_BONUS;
    }

    // Negative for expired jobs; the runway bonus simply never applies
    if days_until(job.deadline, now) > RUNWAY_DAYS {
        score += RUNWAY_BONUS;
    }

    (score * 100.0).round() / 100.0
}

/// Whole days until the deadline, rounded up from milliseconds
#[inline]
pub(crate) fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((deadline - now).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn create_test_job(
        skills: &[&str],
        salary: f64,
        job_type: JobType,
        deadline: DateTime<Utc>,
    ) -> Job {
        Job {
            id: "test_job".to_string(),
            company: "TechNova".to_string(),
            role: "Backend Developer".to_string(),
            location: "Bangalore".to_string(),
            job_type,
            salary,
            deadline,
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            apply_link: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_full_match_urgent_remote_high_salary() {
        let now = test_now();
        let job = create_test_job(&["Python"], 70_000.0, JobType::Remote, now + Duration::days(3));
        let skills = vec!["Python".to_string()];

        // 10 (match) + 5 (high match) + 3 (salary) + 2 (remote) + 0 (3 days left)
        let score = score_opportunity(&job, &skills, DEFAULT_SALARY_THRESHOLD, now);
        assert_eq!(score, 20.0);
    }

    #[test]
    fn test_runway_bonus_beyond_seven_days() {
        let now = test_now();
        let skills = vec!["Python".to_string()];

        let near = create_test_job(&["Python"], 0.0, JobType::FullTime, now + Duration::days(7));
        let far = create_test_job(&["Python"], 0.0, JobType::FullTime, now + Duration::days(8));

        assert_eq!(score_opportunity(&near, &skills, DEFAULT_SALARY_THRESHOLD, now), 15.0);
        assert_eq!(score_opportunity(&far, &skills, DEFAULT_SALARY_THRESHOLD, now), 17.0);
    }

    #[test]
    fn test_expired_job_gets_no_runway_bonus() {
        let now = test_now();
        let job = create_test_job(&["Python"], 0.0, JobType::FullTime, now - Duration::days(2));
        let skills = vec!["Python".to_string()];

        let score = score_opportunity(&job, &skills, DEFAULT_SALARY_THRESHOLD, now);
        assert_eq!(score, 15.0);
    }

    #[test]
    fn test_high_match_bonus_is_strict() {
        let now = test_now();
        let deadline = now + Duration::days(3);

        // 3/5 = exactly 60%: no bonus
        let job = create_test_job(&["a", "b", "c", "d", "e"], 0.0, JobType::FullTime, deadline);
        let skills = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(score_opportunity(&job, &skills, DEFAULT_SALARY_THRESHOLD, now), 6.0);
    }

    #[test]
    fn test_crossing_cutoff_adds_exactly_bonus_plus_match_term() {
        let now = test_now();
        let deadline = now + Duration::days(3);
        let job_skills: Vec<String> = (0..100).map(|i| format!("s{}", i)).collect();

        let mut job = create_test_job(&[], 0.0, JobType::FullTime, deadline);
        job.skills_required = job_skills.clone();

        let at_59: Vec<String> = job_skills[..59].to_vec();
        let at_61: Vec<String> = job_skills[..61].to_vec();

        let low = score_opportunity(&job, &at_59, DEFAULT_SALARY_THRESHOLD, now);
        let high = score_opportunity(&job, &at_61, DEFAULT_SALARY_THRESHOLD, now);

        // +5.0 bonus plus the 0.2 incremental match term
        assert!((high - low - 5.2).abs() < 1e-9, "expected 5.2, got {}", high - low);
    }

    #[test]
    fn test_salary_threshold_is_inclusive() {
        let now = test_now();
        let deadline = now + Duration::days(3);
        let skills = vec!["Python".to_string()];

        let at = create_test_job(&["Python"], 30_000.0, JobType::FullTime, deadline);
        let below = create_test_job(&["Python"], 29_999.0, JobType::FullTime, deadline);

        assert_eq!(score_opportunity(&at, &skills, DEFAULT_SALARY_THRESHOLD, now), 18.0);
        assert_eq!(score_opportunity(&below, &skills, DEFAULT_SALARY_THRESHOLD, now), 15.0);
    }

    #[test]
    fn test_requirement_free_job_gets_full_bonuses() {
        let now = test_now();
        let job = create_test_job(&[], 50_000.0, JobType::Remote, now + Duration::days(30));

        // 100% trivial match: 10 + 5 + 3 + 2 + 2
        let score = score_opportunity(&job, &["React".to_string()], DEFAULT_SALARY_THRESHOLD, now);
        assert_eq!(score, 22.0);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = test_now();

        assert_eq!(days_until(now + Duration::hours(1), now), 1.0);
        assert_eq!(days_until(now + Duration::days(7), now), 7.0);
        assert_eq!(days_until(now + Duration::days(7) + Duration::hours(1), now), 8.0);
        assert_eq!(days_until(now - Duration::hours(25), now), -1.0);
    }
}
