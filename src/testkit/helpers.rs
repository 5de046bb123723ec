//! Factory functions for test problems.

use crate::model::Problem;

/// A rated problem with no tags, named after its identifier pair.
pub fn problem(contest_id: u32, index: &str, rating: u32) -> Problem {
    Problem::new(
        Some(contest_id),
        index,
        format!("Problem {}{}", contest_id, index),
        Some(rating),
        Vec::new(),
    )
}

/// One problem per rating, contests numbered from 1000 in input order.
///
/// Identifier pairs are distinct and sort in input order.
pub fn rated_pool(ratings: &[u32]) -> Vec<Problem> {
    ratings
        .iter()
        .zip(1000u32..)
        .map(|(rating, contest_id)| problem(contest_id, "A", *rating))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rated_pool_ids_are_distinct_and_ordered() {
        let pool = rated_pool(&[1500, 800, 1200]);
        let ids: Vec<_> = pool.iter().map(Problem::id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(pool[1].rating, Some(800));
    }
}
