#![cfg(feature = "collections")]
//! Property-based tests for the container types.
//!
//! ## Laws
//!
//! 1. **Freeze round-trip**: `sequence.freeze().thaw() == sequence`
//! 2. **Copy independence**: mutating a `copy()` never affects the original
//! 3. **Insertion order**: `OrderedMap` iterates keys in first-insertion order
//! 4. **Set algebra**: union/intersection/difference agree with membership

use proptest::prelude::*;
use rstest::rstest;
use serpentine::Error;
use serpentine::collections::{
    Container, ContainerKind, ImmutableSequence, ImmutableSet, OrderedMap, Sequence,
    SequenceProtocol,
};

fn first_occurrences(keys: &[u8]) -> Vec<u8> {
    let mut seen = Vec::new();
    for &key in keys {
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

proptest! {
    #[test]
    fn prop_freeze_thaw_round_trip(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let sequence: Sequence<i32> = values.iter().copied().collect();
        let frozen: ImmutableSequence<i32> = sequence.clone().freeze();
        prop_assert_eq!(frozen.as_slice(), values.as_slice());
        prop_assert_eq!(frozen.thaw(), sequence);
    }

    #[test]
    fn prop_sequence_copy_is_independent(values in prop::collection::vec(any::<i32>(), 0..30), extra in any::<i32>()) {
        let original: Sequence<i32> = values.iter().copied().collect();
        let mut copy = original.copy();
        copy.append(extra);
        prop_assert_eq!(original.len(), values.len());
        prop_assert_eq!(copy.len(), values.len() + 1);
    }

    #[test]
    fn prop_ordered_map_keys_follow_first_insertion(keys in prop::collection::vec(0u8..16, 0..40)) {
        let mut map = OrderedMap::new();
        for (position, &key) in keys.iter().enumerate() {
            map.insert(key, position);
        }
        let order: Vec<u8> = map.keys().copied().collect();
        prop_assert_eq!(order, first_occurrences(&keys));
    }

    #[test]
    fn prop_ordered_map_copies_are_independent(entries in prop::collection::vec((0u8..16, any::<i32>()), 0..20)) {
        let original: OrderedMap<u8, i32> = entries.into_iter().collect();
        let mut first = original.copy();
        let second = original.copy();
        prop_assert_eq!(&first, &second);
        first.insert(200, 0);
        prop_assert!(!second.contains_key(&200));
        prop_assert_eq!(&second, &original);
    }

    #[test]
    fn prop_ordered_map_pop_keeps_remaining_order(keys in prop::collection::vec(0u8..16, 1..30), victim in 0usize..30) {
        let unique = first_occurrences(&keys);
        let target = unique[victim % unique.len()];
        let mut map: OrderedMap<u8, ()> = keys.iter().map(|&key| (key, ())).collect();
        prop_assert_eq!(map.pop(&target), Ok(()));
        let expected: Vec<u8> = unique.into_iter().filter(|&key| key != target).collect();
        let remaining: Vec<u8> = map.keys().copied().collect();
        prop_assert_eq!(remaining, expected.clone());
        for key in expected {
            prop_assert!(map.get(&key).is_some());
        }
    }

    #[test]
    fn prop_set_algebra_agrees_with_membership(
        left in prop::collection::vec(0u8..20, 0..20),
        right in prop::collection::vec(0u8..20, 0..20),
    ) {
        let left_set: ImmutableSet<u8> = left.iter().copied().collect();
        let right_set: ImmutableSet<u8> = right.iter().copied().collect();
        let union = left_set.union(&right_set);
        let intersection = left_set.intersection(&right_set);
        let difference = left_set.difference(&right_set);
        let symmetric = left_set.symmetric_difference(&right_set);
        for value in 0u8..20 {
            let in_left = left.contains(&value);
            let in_right = right.contains(&value);
            prop_assert_eq!(union.contains(&value), in_left || in_right);
            prop_assert_eq!(intersection.contains(&value), in_left && in_right);
            prop_assert_eq!(difference.contains(&value), in_left && !in_right);
            prop_assert_eq!(symmetric.contains(&value), in_left != in_right);
        }
        prop_assert!(intersection.is_subset(&left_set));
        prop_assert!(union.is_superset(&right_set));
    }
}

#[rstest]
fn test_generic_mutation_rejects_frozen_containers() {
    fn append_twice<S: SequenceProtocol<i32>>(sequence: &mut S) -> serpentine::Result<()> {
        sequence.append_item(1)?;
        sequence.append_item(2)
    }

    let mut list = Sequence::new();
    assert!(append_twice(&mut list).is_ok());
    assert_eq!(list.as_slice(), &[1, 2]);

    let mut tuple = ImmutableSequence::from(vec![0]);
    assert_eq!(
        append_twice(&mut tuple),
        Err(Error::Immutable {
            kind: ContainerKind::ImmutableSequence,
            operation: "append_item",
        })
    );
    assert_eq!(tuple.len(), 1);
}

#[rstest]
fn test_container_kinds() {
    let kinds = [
        Sequence::<i32>::new().kind(),
        ImmutableSequence::<i32>::new().kind(),
        OrderedMap::<i32, i32>::new().kind(),
        ImmutableSet::<i32>::new().kind(),
    ];
    assert_eq!(
        kinds,
        [
            ContainerKind::Sequence,
            ContainerKind::ImmutableSequence,
            ContainerKind::OrderedMap,
            ContainerKind::ImmutableSet,
        ]
    );
}

#[rstest]
fn test_display_matches_scripting_language() {
    let list: Sequence<i32> = (1..=3).collect();
    let tuple = ImmutableSequence::from(vec![1]);
    let map: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let set: ImmutableSet<i32> = [1, 2].into_iter().collect();
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(tuple.to_string(), "(1,)");
    assert_eq!(map.to_string(), "{a: 1, b: 2}");
    assert_eq!(set.to_string(), "frozenset({1, 2})");
}
