//! Ranking: the highest-scoring nodes of a score map.

use std::cmp::Ordering;

use serde::Serialize;

/// One entry of a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<N, S> {
    pub node: N,
    pub score: S,
}

/// Nodes ordered by score, highest first.
pub type Ranking<N, S> = Vec<Ranked<N, S>>;

/// How many nodes [`top_five`] keeps.
pub const TOP_FIVE: usize = 5;

/// The `k` highest-scoring entries of `scores`, descending.
///
/// The sort is stable: entries with equal scores keep the order in which
/// `scores` yields them. Incomparable scores (NaN) are treated as equal to
/// everything. Fewer than `k` entries yields all of them.
#[must_use]
pub fn top_k<'a, N, S, I>(scores: I, k: usize) -> Ranking<N, S>
where
    I: IntoIterator<Item = (&'a N, &'a S)>,
    N: Clone + 'a,
    S: PartialOrd + Copy + 'a,
{
    let mut entries: Ranking<N, S> = scores
        .into_iter()
        .map(|(node, &score)| Ranked {
            node: node.clone(),
            score,
        })
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    entries.truncate(k);
    entries
}

/// The five highest-scoring entries of `scores`.
#[must_use]
pub fn top_five<'a, N, S, I>(scores: I) -> Ranking<N, S>
where
    I: IntoIterator<Item = (&'a N, &'a S)>,
    N: Clone + 'a,
    S: PartialOrd + Copy + 'a,
{
    top_k(scores, TOP_FIVE)
}
