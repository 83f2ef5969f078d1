//! Property tests pinning the algebraic laws of CowArray: fold agreement
//! with reference computations, map laws, zip truncation, round trips, and
//! immutability of retained handles.

use cowarray::persistent::{CowArray, PersistentList};
use proptest::prelude::*;

proptest! {
    /// fold_left agrees with the standard left fold over the elements in order.
    #[test]
    fn prop_fold_left_matches_reference(
        elements in prop::collection::vec(any::<i64>(), 0..100)
    ) {
        let array: CowArray<i64> = elements.iter().copied().collect();
        let folded = array.fold_left(0_i64, |accumulator, x| accumulator.wrapping_add(*x));
        let reference = elements
            .iter()
            .fold(0_i64, |accumulator, x| accumulator.wrapping_add(*x));
        prop_assert_eq!(folded, reference);
    }

    /// fold_right agrees with the standard right fold; subtraction makes the
    /// association order observable.
    #[test]
    fn prop_fold_right_matches_reference(
        elements in prop::collection::vec(any::<i64>(), 0..100)
    ) {
        let array: CowArray<i64> = elements.iter().copied().collect();
        let folded = array.fold_right(0_i64, |x, accumulator| x.wrapping_sub(accumulator));
        let reference = elements
            .iter()
            .rev()
            .fold(0_i64, |accumulator, x| x.wrapping_sub(accumulator));
        prop_assert_eq!(folded, reference);
    }

    /// Forward and reverse engines visit every index exactly once, in
    /// strictly increasing / strictly decreasing order.
    #[test]
    fn prop_engines_visit_each_index_once(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();

        let forward = array.iterate(Vec::new(), |index, _, mut accumulator| {
            accumulator.push(index);
            accumulator
        });
        prop_assert_eq!(forward, (0..elements.len()).collect::<Vec<_>>());

        let backward = array.reverse_iterate(Vec::new(), |index, _, mut accumulator| {
            accumulator.push(index);
            accumulator
        });
        prop_assert_eq!(backward, (0..elements.len()).rev().collect::<Vec<_>>());
    }

    /// map with the identity function is the identity on arrays.
    #[test]
    fn prop_map_identity(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let expected = array.clone();
        prop_assert_eq!(array.map(Clone::clone), expected);
    }

    /// Mapping g after f equals mapping the composition g . f.
    #[test]
    fn prop_map_composition(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let f = |x: &i32| x.wrapping_mul(3);
        let g = |x: &i32| x.wrapping_add(7);

        let array: CowArray<i32> = elements.iter().copied().collect();
        let stepwise = array.clone().map(f).map(g);
        let composed = array.map(|x| g(&f(x)));
        prop_assert_eq!(stepwise, composed);
    }

    /// map_indexed with an index-ignoring identity callable changes nothing.
    #[test]
    fn prop_map_indexed_identity(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let expected = array.clone();
        prop_assert_eq!(array.map_indexed(|_, element| *element), expected);
    }

    /// The zip output length is the minimum of the input lengths.
    #[test]
    fn prop_zip_with_length_is_min(
        left in prop::collection::vec(any::<i32>(), 0..60),
        right in prop::collection::vec(any::<i32>(), 0..60)
    ) {
        let expected = left.len().min(right.len());
        let a: CowArray<i32> = left.into_iter().collect();
        let b: CowArray<i32> = right.into_iter().collect();
        prop_assert_eq!(a.zip_with(b, |x, y| x.wrapping_add(*y)).len(), expected);
    }

    /// The combining function always receives the first operand's element
    /// first, regardless of which operand is shorter.
    #[test]
    fn prop_zip_with_argument_order(
        left in prop::collection::vec(any::<i32>(), 0..60),
        right in prop::collection::vec(any::<i32>(), 0..60)
    ) {
        let expected: Vec<(i32, i32)> = left
            .iter()
            .zip(right.iter())
            .map(|(x, y)| (*x, *y))
            .collect();
        let a: CowArray<(i32, i32)> = left.into_iter().map(|x| (x, 0)).collect();
        let b: CowArray<(i32, i32)> = right.into_iter().map(|y| (y, 0)).collect();
        let zipped = a.zip_with(b, |x, y| (x.0, y.0));
        let collected: Vec<(i32, i32)> = zipped.iter().copied().collect();
        prop_assert_eq!(collected, expected);
    }

    /// Array -> list -> array is the identity.
    #[test]
    fn prop_round_trip_array(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        prop_assert_eq!(CowArray::from_list(&array.to_list()), array);
    }

    /// List -> array -> list is the identity.
    #[test]
    fn prop_round_trip_list(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let list: PersistentList<i32> = elements.into_iter().collect();
        prop_assert_eq!(CowArray::from_list(&list).to_list(), list);
    }

    /// No operation ever mutates an array observed through another handle.
    #[test]
    fn prop_retained_handle_never_changes(
        elements in prop::collection::vec(any::<i32>(), 1..50),
        value: i32,
        index_seed: usize
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let index = index_seed % elements.len();
        let snapshot: Vec<i32> = array.iter().copied().collect();

        let _pushed = array.clone().push(value);
        let _popped = array.clone().pop();
        let _written = array.clone().set(index, value);
        let _mapped = array.clone().map(|x| x.wrapping_mul(2));
        let _zipped = array.clone().zip_with(array.clone(), |x, y| x.wrapping_add(*y));

        let observed: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(observed, snapshot);
    }
}
