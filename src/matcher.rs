//! Nearest-neighbor search over figure signatures.

use crate::figure::Figure;
use crate::trace::{trace_event, trace_span};
use crate::util::{ShapeMatchError, ShapeMatchResult};

/// Result of a closest-figure search.
#[derive(Clone, Copy, Debug)]
pub struct ClosestMatch<'a> {
    /// The winning candidate.
    pub figure: &'a Figure,
    /// Index of the winner within the candidate slice.
    pub index: usize,
    /// L2 distance between the query and winning signatures.
    pub distance: f64,
}

/// Finds the candidate whose signature is closest to the query's under
/// Euclidean distance.
///
/// Runs a full linear scan, emitting the distance of every candidate through
/// the tracing channel. Strict less-than comparison keeps the first candidate
/// achieving the minimum; later equal-distance candidates do not replace it.
/// Fails with [`ShapeMatchError::EmptyCandidates`] on an empty slice.
pub fn find_closest<'a>(
    query: &Figure,
    candidates: &'a [Figure],
) -> ShapeMatchResult<ClosestMatch<'a>> {
    if candidates.is_empty() {
        return Err(ShapeMatchError::EmptyCandidates);
    }

    let query_signature = query.signature()?;
    let _span = trace_span!("find_closest", candidates = candidates.len()).entered();

    let mut winner: Option<usize> = None;
    let mut best_distance = f64::INFINITY;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = query_signature.distance(candidate.signature()?);
        trace_event!(
            "candidate_distance",
            index = index,
            label = candidate.label(),
            distance = distance,
        );
        if distance < best_distance {
            best_distance = distance;
            winner = Some(index);
        }
    }

    let index = winner.ok_or(ShapeMatchError::EmptyCandidates)?;
    Ok(ClosestMatch {
        figure: &candidates[index],
        index,
        distance: best_distance,
    })
}
