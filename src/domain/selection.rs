#![allow(clippy::missing_errors_doc)]
//! Shuffling and subset sizing for the catalogue

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use super::pull_request::PrDescriptor;

/// Return a uniformly random permutation of `descriptors`, leaving the input untouched
pub fn shuffle<R: Rng>(descriptors: &[PrDescriptor], rng: &mut R) -> Vec<PrDescriptor> {
    let mut shuffled = descriptors.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Decide how many of `total` shuffled entries to attempt
///
/// `create_all` attempts every entry; otherwise the count is uniform in `1..=total`.
pub fn select_count<R: Rng>(total: usize, create_all: bool, rng: &mut R) -> Result<usize> {
    if total == 0 {
        anyhow::bail!("Pull request catalogue is empty; nothing to select");
    }

    if create_all {
        Ok(total)
    } else {
        Ok(rng.random_range(1..=total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::build_catalogue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_sources(descriptors: &[PrDescriptor]) -> Vec<String> {
        let mut sources: Vec<_> = descriptors
            .iter()
            .map(|pr| pr.source_branch().to_string())
            .collect();
        sources.sort();
        sources
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let catalogue = build_catalogue("main", true).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let shuffled = shuffle(&catalogue, &mut rng);
            assert_eq!(shuffled.len(), catalogue.len());
            assert_eq!(sorted_sources(&shuffled), sorted_sources(&catalogue));
        }
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let catalogue = build_catalogue("main", false).unwrap();
        let before = catalogue.clone();
        let mut rng = StdRng::seed_from_u64(42);
        let _ = shuffle(&catalogue, &mut rng);
        assert_eq!(catalogue, before);
    }

    #[test]
    fn test_shuffle_changes_order_eventually() {
        let catalogue = build_catalogue("main", true).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let reordered = (0..20).any(|_| shuffle(&catalogue, &mut rng) != catalogue);
        assert!(reordered);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffle(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_select_all() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select_count(10, true, &mut rng).unwrap(), 10);
        assert_eq!(select_count(1, true, &mut rng).unwrap(), 1);
    }

    #[test]
    fn test_select_random_within_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let k = select_count(7, false, &mut rng).unwrap();
            assert!((1..=7).contains(&k), "k = {k} out of range");
        }
    }

    #[test]
    fn test_select_random_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<_> = (0..1000)
            .map(|_| select_count(3, false, &mut rng).unwrap())
            .collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_select_single_entry() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(select_count(1, false, &mut rng).unwrap(), 1);
    }

    #[test]
    fn test_select_empty_catalogue_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_count(0, true, &mut rng).is_err());
        assert!(select_count(0, false, &mut rng).is_err());
    }
}
