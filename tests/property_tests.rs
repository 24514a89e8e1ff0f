//! Property-based tests for l2lsh.
//!
//! These tests verify invariants that should hold regardless of input:
//! - Fingerprints are deterministic and fixed-width
//! - A point always finds itself
//! - Insertion never deduplicates; querying always does
//! - Wrong-dimension points never mutate the index

use std::collections::HashSet;

use l2lsh::hash::HEX_WIDTH;
use l2lsh::{Index, LshError, Settings};
use proptest::prelude::*;

prop_compose! {
    fn arb_point(dim: usize)(p in prop::collection::vec(-1000.0f64..1000.0, dim)) -> Vec<f64> {
        p
    }
}

prop_compose! {
    fn arb_settings()(
        dim in 1usize..16,
        l in 1usize..8,
        m in 1usize..6,
        w in 0.1f64..50.0,
        seed in any::<u64>(),
    ) -> Settings {
        Settings::with_seed(dim, l, m, w, seed).unwrap()
    }
}

fn settings_and_point() -> impl Strategy<Value = (Settings, Vec<f64>)> {
    arb_settings().prop_flat_map(|s| {
        let dim = s.dim();
        (Just(s), arb_point(dim))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fingerprints_deterministic((settings, point) in settings_and_point()) {
        let rebuilt = Settings::with_seed(
            settings.dim(),
            settings.num_tables(),
            settings.num_functions(),
            settings.bucket_width(),
            settings.seed(),
        ).unwrap();
        prop_assert_eq!(settings.hash(&point).unwrap(), rebuilt.hash(&point).unwrap());
    }

    #[test]
    fn fingerprints_fixed_width((settings, point) in settings_and_point()) {
        let fps = settings.hash(&point).unwrap();
        prop_assert_eq!(fps.len(), settings.num_tables());
        for fp in &fps {
            prop_assert_eq!(fp.as_str().len(), settings.num_functions() * HEX_WIDTH);
            prop_assert!(fp.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn point_finds_itself((settings, point) in settings_and_point(), id in any::<u64>()) {
        let mut index = Index::new(settings);
        index.insert(id, &point).unwrap();
        let got: Vec<u64> = index.query(&point).unwrap().copied().collect();
        prop_assert_eq!(got, vec![id]);
    }

    #[test]
    fn repeated_insert_counts((settings, point) in settings_and_point(), k in 1usize..10) {
        let mut index = Index::new(settings);
        for _ in 0..k {
            index.insert(0u64, &point).unwrap();
        }
        let fps = index.settings().hash(&point).unwrap();
        for (t, fp) in fps.iter().enumerate() {
            prop_assert_eq!(index.bucket(t, fp).map(<[u64]>::len), Some(k));
        }
    }

    #[test]
    fn query_never_repeats(
        (settings, point) in settings_and_point(),
        ids in prop::collection::vec(0u64..5, 1..30),
    ) {
        let mut index = Index::new(settings);
        for &id in &ids {
            index.insert(id, &point).unwrap();
        }
        let got: Vec<u64> = index.query(&point).unwrap().copied().collect();
        let unique: HashSet<u64> = got.iter().copied().collect();
        prop_assert_eq!(unique.len(), got.len());
        let expected: HashSet<u64> = ids.iter().copied().collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn wrong_dimension_rejected(
        (settings, point) in settings_and_point(),
        extra in 1usize..4,
    ) {
        let dim = settings.dim();
        let mut index = Index::new(settings);
        index.insert(1u64, &point).unwrap();

        let mut longer = point.clone();
        longer.extend(std::iter::repeat(0.0).take(extra));
        prop_assert_eq!(
            index.insert(2, &longer),
            Err(LshError::DimensionMismatch { expected: dim, actual: dim + extra })
        );
        prop_assert!(index.query(&longer).is_err());

        prop_assert_eq!(index.len(), 1);
        for t in 0..index.num_tables() {
            prop_assert_eq!(index.num_buckets(t), 1);
        }
    }
}
