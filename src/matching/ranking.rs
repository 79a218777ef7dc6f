use crate::core::hit::AlignmentHit;

/// Number of ranked hits shown in reports
pub const DEFAULT_HIT_WINDOW: usize = 5;

/// Sort hits by bit score, strongest first.
///
/// The sort is stable, so hits with equal bit scores keep their input order
/// (`-0.0` and `0.0` are equal). Ranking is unbounded; use [`top_hits`] to
/// pick a display window.
#[must_use]
pub fn rank_hits(mut hits: Vec<AlignmentHit>) -> Vec<AlignmentHit> {
    hits.sort_by(|a, b| {
        // total_cmp only decides NaN, which partial_cmp cannot order
        b.bitscore
            .partial_cmp(&a.bitscore)
            .unwrap_or_else(|| b.bitscore.total_cmp(&a.bitscore))
    });
    hits
}

/// The first `n` ranked hits, or all of them if there are fewer
#[must_use]
pub fn top_hits(ranked: &[AlignmentHit], n: usize) -> &[AlignmentHit] {
    &ranked[..n.min(ranked.len())]
}
