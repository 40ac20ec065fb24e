// Stow - stow-foundation
// Module: Store primitives
// SW-REQ-ID: REQ_STORE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Swap, lower-bound search and heap sort over three storage shapes.
//!
//! | Shape | Search | Sort | Swap |
//! |---|---|---|---|
//! | typed values `[T]` | [`search`] | [`sort`] | `<[T]>::swap` |
//! | references `[&T]` | [`psearch`] | [`psort`] | [`swap_pointer`] |
//! | byte records in `[u8]` | [`search_records`] | [`sort_records`] | [`swap_block`] |
//!
//! The algorithms are written once against [`Slots`] / [`SlotsMut`]; each
//! shape only says how to view slot `i` and how to exchange two slots.

pub mod search;
pub mod sort;
pub mod swap;

pub use search::{lower_bound, psearch, search, search_records};
pub use sort::{heap_sort, psort, sort, sort_records};
pub use swap::{swap_block, swap_pointer, swap_records};

/// Read access to an ordered run of slots.
pub trait Slots {
    /// What a comparator sees for one slot.
    type Item: ?Sized;

    /// Number of occupied slots.
    fn slot_count(&self) -> usize;

    /// View of slot `index`. Callers guarantee `index < slot_count()`.
    fn slot(&self, index: usize) -> &Self::Item;
}

/// Slots that can be exchanged in place.
pub trait SlotsMut: Slots {
    /// Exchange slots `a` and `b`. A no-op when `a == b`.
    fn swap_slots(&mut self, a: usize, b: usize);
}

impl<T> Slots for [T] {
    type Item = T;

    #[inline]
    fn slot_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SlotsMut for [T] {
    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// Reference slots viewed through one extra dereference.
///
/// The comparator sees the referents, not the references.
#[derive(Debug)]
pub struct Pointers<'s, 'b, T: ?Sized>(pub &'s [&'b T]);

impl<T: ?Sized> Slots for Pointers<'_, '_, T> {
    type Item = T;

    #[inline]
    fn slot_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> &T {
        self.0[index]
    }
}

/// Mutable reference slots; exchanges go through [`swap_pointer`].
#[derive(Debug)]
pub struct PointersMut<'s, 'b, T: ?Sized>(pub &'s mut [&'b T]);

impl<T: ?Sized> Slots for PointersMut<'_, '_, T> {
    type Item = T;

    #[inline]
    fn slot_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> &T {
        self.0[index]
    }
}

impl<T: ?Sized> SlotsMut for PointersMut<'_, '_, T> {
    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.0.split_at_mut(hi);
        swap_pointer(&mut head[lo], &mut tail[0]);
    }
}

/// Fixed-size byte records packed back to back.
///
/// A trailing partial record is not part of the sequence.
#[derive(Debug)]
pub struct Records<'s> {
    base:      &'s [u8],
    item_size: usize,
}

impl<'s> Records<'s> {
    /// View `base` as records of `item_size` bytes.
    #[must_use]
    pub fn new(base: &'s [u8], item_size: usize) -> Self {
        Self { base, item_size }
    }
}

impl Slots for Records<'_> {
    type Item = [u8];

    #[inline]
    fn slot_count(&self) -> usize {
        self.base.len().checked_div(self.item_size).unwrap_or(0)
    }

    #[inline]
    fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.item_size;
        &self.base[start..start + self.item_size]
    }
}

/// Mutable fixed-size byte records; exchanges go through [`swap_block`].
#[derive(Debug)]
pub struct RecordsMut<'s> {
    base:      &'s mut [u8],
    item_size: usize,
}

impl<'s> RecordsMut<'s> {
    /// View `base` as mutable records of `item_size` bytes.
    #[must_use]
    pub fn new(base: &'s mut [u8], item_size: usize) -> Self {
        Self { base, item_size }
    }
}

impl Slots for RecordsMut<'_> {
    type Item = [u8];

    #[inline]
    fn slot_count(&self) -> usize {
        self.base.len().checked_div(self.item_size).unwrap_or(0)
    }

    #[inline]
    fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.item_size;
        &self.base[start..start + self.item_size]
    }
}

impl SlotsMut for RecordsMut<'_> {
    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        swap_records(self.base, self.item_size, a, b);
    }
}
