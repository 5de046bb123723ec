//! Filter a candidate pool and draw a bounded random sample from it.
//!
//! The draw is a partial shuffle over the filtered indices
//! (`rand::seq::index::sample`), so it takes O(k) steps no matter how close
//! the pool size is to the requested count. Any `rand::Rng` can drive it.
//! Production uses `rand::thread_rng()`; tests pass a seeded `StdRng`.

use crate::errors::NoMatches;
use crate::model::{Problem, SelectionCriteria};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Maximum number of problems returned per submission.
pub const SAMPLE_SIZE: usize = 5;

/// Candidates that satisfy `criteria`, in pool order.
///
/// Only the rating range is checked here. The pool is expected to be scoped
/// to `criteria.topic` by the catalog query already, and catalog tag strings
/// need not match topic labels. Unrated entries never match. Entries sharing
/// an identifier pair collapse to their first occurrence.
pub fn filter_pool<'a>(pool: &'a [Problem], criteria: &SelectionCriteria) -> Vec<&'a Problem> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|p| p.rating.is_some_and(|r| criteria.range.contains(r)))
        .filter(|p| seen.insert(p.id()))
        .collect()
}

/// Draw up to [`SAMPLE_SIZE`] distinct problems matching `criteria`.
///
/// Returns [`NoMatches`] when nothing survives filtering. Output order is
/// selection order.
pub fn sample<R>(
    pool: &[Problem],
    criteria: &SelectionCriteria,
    rng: &mut R,
) -> Result<Vec<Problem>, NoMatches>
where
    R: Rng + ?Sized,
{
    let filtered = filter_pool(pool, criteria);
    if filtered.is_empty() {
        debug!(pool = pool.len(), range = %criteria.range, "no candidates after filtering");
        return Err(NoMatches {
            range: criteria.range,
        });
    }

    let amount = SAMPLE_SIZE.min(filtered.len());
    let picked: Vec<Problem> = rand::seq::index::sample(rng, filtered.len(), amount)
        .into_iter()
        .map(|i| filtered[i].clone())
        .collect();

    debug!(
        pool = pool.len(),
        filtered = filtered.len(),
        picked = picked.len(),
        "sampled candidates"
    );
    Ok(picked)
}
