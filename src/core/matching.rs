use crate::core::normalize::{normalize_all, normalize_skill};
use crate::models::SkillMatch;

/// Compare a candidate's skills against a job's required skills
///
/// Returns the integer match percentage (0-100, round half-up) together with
/// the matched and missing requirement lists. Both lists echo the job's
/// original skill strings in requirement order.
///
/// Edge cases:
/// * A job with no stated requirements is trivially a full match.
/// * A candidate with no recorded skills gets 0% with `needs_skills: true`,
///   signalling the caller to prompt for profile completion. This is distinct
///   from a genuine 0% match against stated skills.
pub fn match_skills(candidate_skills: &[String], job_skills: &[String]) -> SkillMatch {
    if job_skills.is_empty() {
        return SkillMatch {
            match_percentage: 100,
            matched_skills: vec![],
            missing_skills: vec![],
            needs_skills: false,
        };
    }

    if candidate_skills.is_empty() {
        return SkillMatch {
            match_percentage: 0,
            matched_skills: vec![],
            missing_skills: job_skills.to_vec(),
            needs_skills: true,
        };
    }

    // Normalize the candidate list once; job skills are normalized per lookup
    let normalized_candidate = normalize_all(candidate_skills);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in job_skills {
        if normalized_candidate.contains(&normalize_skill(skill)) {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let match_percentage =
        ((matched_skills.len() as f64 / job_skills.len() as f64) * 100.0).round() as u8;

    SkillMatch {
        match_percentage,
        matched_skills,
        missing_skills,
        needs_skills: false,
    }
}
