use crate::model::MatchResult;

/// Orders results best first and keeps at most `limit` of them.
///
/// Gated results (score 0) are always dropped, as is anything below `min_score`.
/// Equal scores keep their input order.
pub fn rank_matches(
    mut results: Vec<MatchResult>,
    min_score: u32,
    limit: usize,
) -> Vec<MatchResult> {
    results.retain(|r| r.score > 0 && r.score >= min_score);
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}
