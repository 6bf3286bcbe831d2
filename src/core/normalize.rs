/// Normalize a skill token for comparison
///
/// Comparison is case- and surrounding-whitespace-insensitive: `"  React "`
/// and `"react"` are the same skill. Original casing is preserved in engine
/// outputs; only comparisons use the normalized form.
#[inline]
pub(crate) fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalize a whole skill list once, ahead of repeated membership tests
pub(crate) fn normalize_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}
