use crate::constants::{
    EXPERIENCE_FLOOR_POINTS, EXPERIENCE_PARTIAL_POINTS, EXPERIENCE_WEIGHT, MAX_SCORE, SKILL_WEIGHT,
};

/// Experience points out of 10.
///
/// Full marks at or above the requirement, 6 at half of it or more, otherwise the
/// proportional share with a floor of 2.
pub fn experience_points(candidate_years: u32, required_years: u32) -> u32 {
    if candidate_years >= required_years {
        return EXPERIENCE_WEIGHT;
    }
    if f64::from(candidate_years) >= f64::from(required_years) * 0.5 {
        return EXPERIENCE_PARTIAL_POINTS;
    }
    let share = f64::from(candidate_years) / f64::from(required_years.max(1));
    let points = (share * f64::from(EXPERIENCE_WEIGHT)).round() as u32;
    points.max(EXPERIENCE_FLOOR_POINTS)
}

/// Skill points out of 25 for a skill score in `[0, 100]`.
#[inline]
pub fn skill_points(skill_score: u32) -> u32 {
    let score = skill_score.min(MAX_SCORE);
    (f64::from(score) / f64::from(MAX_SCORE) * f64::from(SKILL_WEIGHT)).round() as u32
}
