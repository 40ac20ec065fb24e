// Stow - stow-foundation
// Module: In-place heap sort
// SW-REQ-ID: REQ_STORE_004
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! In-place heap sort.
//!
//! Uses no auxiliary storage beyond a few indices, and never recurses, so
//! stack use is constant. The sort is not stable.

use core::cmp::Ordering;

use stow_error::{Error, Result};

use super::{PointersMut, RecordsMut, SlotsMut};

/// Sort any [`SlotsMut`] view into non-decreasing order under `compare`.
pub fn heap_sort<S, F>(slots: &mut S, mut compare: F)
where
    S: SlotsMut + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = slots.slot_count();
    if len < 2 {
        return;
    }

    // Build a max-heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(slots, node, len, &mut compare);
    }

    // Move the maximum behind the shrinking heap.
    for end in (1..len).rev() {
        slots.swap_slots(0, end);
        sift_down(slots, 0, end, &mut compare);
    }
}

/// Restore `parent >= child` below `node` within the first `end` slots.
fn sift_down<S, F>(slots: &mut S, mut node: usize, end: usize, compare: &mut F)
where
    S: SlotsMut + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    loop {
        let left = 2 * node + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let greater = if right < end
            && compare(slots.slot(left), slots.slot(right)) == Ordering::Less
        {
            right
        } else {
            left
        };
        if compare(slots.slot(node), slots.slot(greater)) != Ordering::Less {
            break;
        }
        slots.swap_slots(node, greater);
        node = greater;
    }
}

/// Sort a slice of values in place.
///
/// Never fails for slices; the `Result` keeps the signature aligned with
/// [`sort_records`].
///
/// # Examples
///
/// ```
/// use stow_foundation::sort;
///
/// let mut items = [5, 1, 4, 1, 3];
/// sort(&mut items, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(items, [1, 1, 3, 4, 5]);
/// ```
pub fn sort<T, F>(items: &mut [T], compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace_scope!(crate::tracing::SortTrace::heap_sort("value", items.len()));
    heap_sort(items, compare);
    Ok(())
}

/// Sort a slice of references by their referents.
///
/// Only the references move; the referents are never written.
pub fn psort<T, F>(items: &mut [&T], compare: F) -> Result<()>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    trace_scope!(crate::tracing::SortTrace::heap_sort("pointer", items.len()));
    heap_sort(&mut PointersMut(items), compare);
    Ok(())
}

/// Sort the `item_size`-byte records packed in `base`.
///
/// # Errors
///
/// Returns [`Error::PARAM`] if `item_size` is zero or `base` is not a whole
/// number of records. `base` is left untouched in that case.
pub fn sort_records<F>(base: &mut [u8], item_size: usize, compare: F) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if item_size == 0 || base.len() % item_size != 0 {
        return Err(Error::param("Record size does not divide the buffer"));
    }
    trace_scope!(crate::tracing::SortTrace::heap_sort("record", base.len() / item_size));
    heap_sort(&mut RecordsMut::new(base, item_size), compare);
    Ok(())
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_heap_sort_orders_small_arrays() {
        let mut items: [u8; 4] = kani::any();
        let mut sum_before: u32 = 0;
        for item in &items {
            sum_before += u32::from(*item);
        }

        assert!(sort(&mut items, |a, b| a.cmp(b)).is_ok());

        let mut sum_after: u32 = 0;
        for item in &items {
            sum_after += u32::from(*item);
        }
        assert!(sum_before == sum_after);
        for i in 1..items.len() {
            assert!(items[i - 1] <= items[i]);
        }
    }
}
