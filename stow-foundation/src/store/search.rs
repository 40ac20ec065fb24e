// Stow - stow-foundation
// Module: Lower-bound search
// SW-REQ-ID: REQ_STORE_003
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Binary lower-bound search.
//!
//! Every function here returns the smallest index `i` such that the
//! comparator does not report `key > slot(i)`, or the slot count when the
//! key is greater than every slot. The result is always in `0..=len`.
//! Equal and missing keys are not distinguished; callers compare the slot at
//! the returned index themselves.

use core::cmp::Ordering;

use super::{Pointers, Records, Slots};

/// Lower bound of `key` over any [`Slots`] view.
///
/// `compare(key, slot)` orders the key against one slot. The sequence must be
/// sorted under that comparator for the result to be meaningful, but the
/// returned index is in range for any input.
pub fn lower_bound<S, K, F>(slots: &S, key: &K, mut compare: F) -> usize
where
    S: Slots + ?Sized,
    K: ?Sized,
    F: FnMut(&K, &S::Item) -> Ordering,
{
    let mut lo = 0;
    let mut hi = slots.slot_count();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if compare(key, slots.slot(mid)) == Ordering::Greater {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Lower bound of `key` in a sorted slice of values.
///
/// # Examples
///
/// ```
/// use stow_foundation::search;
///
/// let items = [10, 20, 20, 30];
/// assert_eq!(search(&items, &20, |k, e| k.cmp(e)), 1);
/// assert_eq!(search(&items, &25, |k, e| k.cmp(e)), 3);
/// assert_eq!(search(&items, &99, |k, e| k.cmp(e)), 4);
/// ```
pub fn search<T, K, F>(items: &[T], key: &K, compare: F) -> usize
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    lower_bound(items, key, compare)
}

/// Lower bound of `key` in a sorted slice of references.
///
/// The comparator sees the referents.
pub fn psearch<T, K, F>(items: &[&T], key: &K, compare: F) -> usize
where
    T: ?Sized,
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    lower_bound(&Pointers(items), key, compare)
}

/// Lower bound of `key` among the `item_size`-byte records packed in `base`.
///
/// A zero `item_size` describes no records and yields 0.
pub fn search_records<F>(base: &[u8], item_size: usize, key: &[u8], compare: F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    lower_bound(&Records::new(base, item_size), key, compare)
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_lower_bound_in_range() {
        let items: [u8; 4] = kani::any();
        let key: u8 = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= items.len());

        let index = search(&items[..len], &key, |k, e| k.cmp(e));
        assert!(index <= len);
    }
}
