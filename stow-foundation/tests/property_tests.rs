// Property tests for search, sort and the policy engine

use proptest::prelude::*;
use stow_error::Error;
use stow_foundation::{
    psort, search, search_records, sort, sort_records, InsertPolicy, StoreVec,
};

const CAPACITY: usize = 24;

fn policy_strategy() -> impl Strategy<Value = InsertPolicy> {
    (0u8..10).prop_map(|tag| InsertPolicy::try_from(tag).unwrap())
}

fn by_key(a: &(u8, u16), b: &(u8, u16)) -> core::cmp::Ordering {
    a.0.cmp(&b.0)
}

fn is_sorted_by_key(items: &[(u8, u16)]) -> bool {
    items.windows(2).all(|w| w[0].0 <= w[1].0)
}

proptest! {
    #[test]
    fn sort_orders_any_input(mut items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut expected = items.clone();
        expected.sort_unstable();
        sort(&mut items, |a, b| a.cmp(b)).unwrap();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn psort_orders_referents(values in prop::collection::vec(any::<u16>(), 0..48)) {
        let mut refs: Vec<&u16> = values.iter().collect();
        psort(&mut refs, |a, b| a.cmp(b)).unwrap();
        prop_assert!(refs.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(refs.len(), values.len());
    }

    #[test]
    fn sort_records_matches_chunk_sort(
        records in prop::collection::vec(any::<[u8; 3]>(), 0..32)
    ) {
        let mut base: Vec<u8> = records.iter().flatten().copied().collect();
        sort_records(&mut base, 3, |a, b| a.cmp(b)).unwrap();

        let mut expected = records.clone();
        expected.sort_unstable();
        let expected: Vec<u8> = expected.iter().flatten().copied().collect();
        prop_assert_eq!(base, expected);
    }

    #[test]
    fn sort_records_rejects_partial_records(len in 1usize..64, item_size in 2usize..9) {
        prop_assume!(len % item_size != 0);
        let mut base = vec![0xA5u8; len];
        prop_assert_eq!(sort_records(&mut base, item_size, |a, b| a.cmp(b)), Err(Error::PARAM));
        prop_assert!(base.iter().all(|b| *b == 0xA5));
    }

    #[test]
    fn lower_bound_splits_the_sequence(
        mut items in prop::collection::vec(0u8..32, 0..40),
        key in 0u8..40,
    ) {
        items.sort_unstable();
        let index = search(&items, &key, |k, e| k.cmp(e));
        prop_assert!(index <= items.len());
        prop_assert!(items[..index].iter().all(|e| *e < key));
        prop_assert!(items[index..].iter().all(|e| *e >= key));
    }

    #[test]
    fn search_records_agrees_with_search(
        mut keys in prop::collection::vec(any::<u8>(), 0..32),
        key in any::<u8>(),
    ) {
        keys.sort_unstable();
        let base: Vec<u8> = keys.iter().flat_map(|k| [*k, 0xEE]).collect();
        let by_records = search_records(&base, 2, &[key], |k, e| k[0].cmp(&e[0]));
        prop_assert_eq!(by_records, search(&keys, &key, |k, e| k.cmp(e)));
    }

    #[test]
    fn sort_then_search_finds_every_element(items in prop::collection::vec(any::<i16>(), 1..64)) {
        let mut sorted = items.clone();
        sort(&mut sorted, |a, b| a.cmp(b)).unwrap();
        for item in &items {
            let index = search(&sorted, item, |k, e| k.cmp(e));
            prop_assert!(index < sorted.len());
            prop_assert_eq!(sorted[index], *item);
        }
    }

    #[test]
    fn sorted_insert_keeps_order(
        ops in prop::collection::vec((0u8..16, any::<u16>(), policy_strategy()), 0..64)
    ) {
        let mut slots = [(0u8, 0u16); CAPACITY];
        let mut vec = StoreVec::new(&mut slots).unwrap();
        for (key, payload, policy) in ops {
            let before = vec.len();
            let outcome = vec.sorted_insert((key, payload), by_key, policy);
            prop_assert!(is_sorted_by_key(vec.as_slice()));
            match outcome {
                Ok(()) => prop_assert!(vec.len() == before || vec.len() == before + 1),
                Err(_) => prop_assert_eq!(vec.len(), before),
            }
        }
    }

    #[test]
    fn failed_sorted_insert_changes_nothing(
        mut seed in prop::collection::vec((0u8..8, any::<u16>()), 0..CAPACITY),
        candidate in (0u8..8, any::<u16>()),
        policy in policy_strategy(),
    ) {
        seed.sort_by_key(|e| e.0);
        let mut slots = [(0u8, 0u16); CAPACITY];
        let mut vec = StoreVec::new(&mut slots).unwrap();
        for e in &seed {
            vec.push(*e).unwrap();
        }

        if vec.sorted_insert(candidate, by_key, policy).is_err() {
            prop_assert_eq!(vec.as_slice(), seed.as_slice());
        }
    }

    #[test]
    fn update_all_is_idempotent(
        mut seed in prop::collection::vec((0u8..6, any::<u16>()), 1..CAPACITY),
        payload in any::<u16>(),
        pick in any::<prop::sample::Index>(),
    ) {
        seed.sort_by_key(|e| e.0);
        let candidate = (seed[pick.index(seed.len())].0, payload);

        let mut slots = [(0u8, 0u16); CAPACITY];
        let mut vec = StoreVec::new(&mut slots).unwrap();
        for e in &seed {
            vec.push(*e).unwrap();
        }

        vec.sorted_insert(candidate, by_key, InsertPolicy::UpdateAll).unwrap();
        let once: Vec<(u8, u16)> = vec.as_slice().to_vec();
        vec.sorted_insert(candidate, by_key, InsertPolicy::UpdateAll).unwrap();
        prop_assert_eq!(vec.as_slice(), once.as_slice());
        prop_assert!(once.iter().filter(|e| e.0 == candidate.0).all(|e| e.1 == payload));
    }

    #[test]
    fn full_vector_rejects_any(
        mut seed in prop::collection::vec(any::<u8>(), 1..16),
        candidate in any::<u8>(),
    ) {
        seed.sort_unstable();
        let mut slots = vec![0u8; seed.len()];
        let mut vec = StoreVec::new(&mut slots).unwrap();
        for v in &seed {
            vec.push(*v).unwrap();
        }

        prop_assert_eq!(
            vec.sorted_insert(candidate, |a, b| a.cmp(b), InsertPolicy::Any),
            Err(Error::FULL)
        );
        prop_assert_eq!(vec.len(), seed.len());
        prop_assert_eq!(vec.as_slice(), seed.as_slice());
    }
}
