//! Property-based tests for the sampler
//!
//! These hold for every pool and every selectable range:
//! - Output length is min(5, number of matching candidates)
//! - Output entries are distinct and drawn from the matching candidates
//! - An empty match set is always reported as NoMatches with the same range

use cfpick::model::{rating_steps, RatingRange};
use cfpick::testkit::rated_pool;
use cfpick::{filter_pool, sample, SelectionCriteria, SAMPLE_SIZE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn grid_rating() -> impl Strategy<Value = u32> {
    let steps: Vec<u32> = rating_steps().collect();
    prop::sample::select(steps)
}

fn grid_range() -> impl Strategy<Value = RatingRange> {
    (grid_rating(), grid_rating()).prop_map(|(a, b)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        RatingRange::new(low, high).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_length_is_bounded_by_matches(
        ratings in prop::collection::vec(grid_rating(), 0..40),
        range in grid_range(),
        seed in any::<u64>(),
    ) {
        let pool = rated_pool(&ratings);
        let criteria = SelectionCriteria::new(range, None);
        let matching = ratings.iter().filter(|r| range.contains(**r)).count();
        let mut rng = StdRng::seed_from_u64(seed);

        match sample(&pool, &criteria, &mut rng) {
            Ok(picked) => {
                prop_assert!(matching > 0);
                prop_assert_eq!(picked.len(), SAMPLE_SIZE.min(matching));
            }
            Err(no_matches) => {
                prop_assert_eq!(matching, 0);
                prop_assert_eq!(no_matches.range, range);
            }
        }
    }

    #[test]
    fn prop_picks_are_distinct_matching_candidates(
        ratings in prop::collection::vec(grid_rating(), 1..40),
        range in grid_range(),
        seed in any::<u64>(),
    ) {
        let pool = rated_pool(&ratings);
        let criteria = SelectionCriteria::new(range, None);
        let allowed: HashSet<_> = filter_pool(&pool, &criteria)
            .into_iter()
            .map(|p| p.id())
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);

        if let Ok(picked) = sample(&pool, &criteria, &mut rng) {
            let ids: HashSet<_> = picked.iter().map(|p| p.id()).collect();
            prop_assert_eq!(ids.len(), picked.len());
            prop_assert!(ids.is_subset(&allowed));
            for problem in &picked {
                prop_assert!(problem.rating.is_some_and(|r| range.contains(r)));
            }
        }
    }

    #[test]
    fn prop_same_seed_same_selection(
        ratings in prop::collection::vec(grid_rating(), 1..40),
        seed in any::<u64>(),
    ) {
        let pool = rated_pool(&ratings);
        let criteria = SelectionCriteria::new(RatingRange::new(800, 4000).unwrap(), None);

        let first = sample(&pool, &criteria, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = sample(&pool, &criteria, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
