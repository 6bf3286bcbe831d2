use crate::core::matching::match_skills;
use crate::models::{Application, Job, TrendDirection, TrendIndicator};

const AVG_MATCH_WEIGHT: f64 = 0.35;
const APPLICATION_WEIGHT: f64 = 0.25;
const INTERVIEW_WEIGHT: f64 = 0.30;

const APPLICATION_POINTS: f64 = 10.0;
const INTERVIEW_POINTS: f64 = 20.0;
const COMPONENT_CAP: f64 = 100.0;
const RESUME_BONUS: f64 = 10.0;

/// Calculate a placement readiness score (0-100)
///
/// Scoring formula:
/// score = avg_bookmark_match * 0.35    # mean match over saved jobs
///       + application_score * 0.25     # 10 pts per application, capped at 100
///       + interview_score * 0.30       # 20 pts per interview/selection, capped at 100
///       + 10 if a resume is on file
///
/// The resume bonus sits on top of the weighted components, so the raw value
/// can reach 110 before the final clamp to 100.
pub fn readiness_score(
    candidate_skills: &[String],
    has_resume: bool,
    bookmarked_jobs: &[Job],
    applications: &[Application],
) -> u8 {
    let avg_match = if bookmarked_jobs.is_empty() {
        0.0
    } else {
        let total: f64 = bookmarked_jobs
            .iter()
            .map(|job| match_skills(candidate_skills, &job.skills_required).match_percentage as f64)
            .sum();
        total / bookmarked_jobs.len() as f64
    };

    let app_score = (applications.len() as f64 * APPLICATION_POINTS).min(COMPONENT_CAP);

    let interview_count = applications
        .iter()
        .filter(|a| a.status.reached_interview())
        .count();
    let interview_score = (interview_count as f64 * INTERVIEW_POINTS).min(COMPONENT_CAP);

    let resume_bonus = if has_resume { RESUME_BONUS } else { 0.0 };

    let raw = avg_match * AVG_MATCH_WEIGHT
        + app_score * APPLICATION_WEIGHT
        + interview_score * INTERVIEW_WEIGHT
        + resume_bonus;

    raw.round().min(100.0) as u8
}

/// Compare the current readiness score to a previous snapshot
pub fn readiness_trend(current: u8, previous: u8) -> TrendIndicator {
    let delta = current as i16 - previous as i16;

    let direction = match delta.cmp(&0) {
        std::cmp::Ordering::Greater => TrendDirection::Up,
        std::cmp::Ordering::Less => TrendDirection::Down,
        std::cmp::Ordering::Equal => TrendDirection::Neutral,
    };

    TrendIndicator { direction, delta }
}
