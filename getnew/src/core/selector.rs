//! Deterministic candidate selection: filter, rank by recency, pick.

use crate::core::types::{FileCandidate, SelectionQuery};
use crate::error::GetnewError;

/// Returns true if `name` contains `filter`, ignoring case. No filter matches everything.
pub fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(filter) => name.to_lowercase().contains(&filter.to_lowercase()),
        None => true,
    }
}

/// Order candidates newest first.
///
/// The sort is stable, so candidates with equal modification times keep the
/// order they were listed in.
pub fn rank_by_recency(candidates: &mut [FileCandidate]) {
    candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Apply the query's filter and rank to a directory listing.
pub fn select_candidate(
    mut candidates: Vec<FileCandidate>,
    query: &SelectionQuery,
) -> Result<FileCandidate, GetnewError> {
    let filter = query.filter.as_deref();
    candidates.retain(|candidate| matches_filter(&candidate.name_lossy(), filter));
    if candidates.is_empty() {
        return Err(GetnewError::NotFound {
            filter: query.filter.clone(),
        });
    }

    rank_by_recency(&mut candidates);

    let rank = query.rank.get();
    if rank > candidates.len() {
        return Err(GetnewError::OutOfRange {
            rank,
            available: candidates.len(),
        });
    }
    Ok(candidates.swap_remove(rank - 1))
}
