// Stow - stow-foundation
// Module: StoreVec - Value vector over borrowed storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity vector of `Copy` values in caller-supplied storage.
//!
//! `StoreVec<'a, T>` borrows a `&'a mut [T]` and tracks how many leading
//! slots are occupied. It never allocates and never moves the storage.
//!
//! # Characteristics
//!
//! - **Zero allocation**: capacity is the length of the borrowed slice
//! - **Shift-based insert/delete**: O(n) moves within the slice
//! - **Sorted operations**: heap sort and [`sorted_insert`](StoreVec::sorted_insert)
//! - **Deterministic failures**: every error leaves the vector unchanged

use core::cmp::Ordering;

use stow_error::{Error, Result};

use crate::policy::{self, InsertPolicy, SortedStore};
use crate::store;

/// A vector of `Copy` values with fixed capacity and borrowed storage.
///
/// # Invariants
///
/// 1. `count <= items.len()` always holds
/// 2. Slots `[0, count)` hold the elements in order
/// 3. Slots `[count, capacity)` are don't-care and never read
///
/// # Examples
///
/// ```
/// use stow_foundation::StoreVec;
///
/// let mut slots = [0u32; 4];
/// let mut vec = StoreVec::new(&mut slots)?;
/// vec.push(3)?;
/// vec.push(1)?;
/// vec.insert(1, 2)?;
///
/// assert_eq!(vec.as_slice(), &[3, 2, 1]);
/// assert_eq!(vec.pop()?, 1);
/// assert_eq!(vec.len(), 2);
/// # Ok::<(), stow_foundation::Error>(())
/// ```
#[derive(Debug)]
pub struct StoreVec<'a, T: Copy> {
    /// Borrowed backing storage
    items: &'a mut [T],

    /// Number of occupied slots
    /// Invariant: count <= items.len()
    count: usize,
}

impl<'a, T: Copy> StoreVec<'a, T> {
    /// Creates an empty vector over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `items` has no slots.
    pub fn new(items: &'a mut [T]) -> Result<Self> {
        Self::from_initialized(items, 0)
    }

    /// Adopts the first `count` slots of `items` as existing elements.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `items` has no slots or `count` exceeds them.
    pub fn from_initialized(items: &'a mut [T], count: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::param("StoreVec needs at least one slot"));
        }
        if count > items.len() {
            return Err(Error::param("Initial count exceeds StoreVec capacity"));
        }
        Ok(Self { items, count })
    }

    /// Returns the capacity, fixed by the borrowed storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.items.len()
    }

    /// Forgets every element. Storage contents are left as they are.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn replace(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.items[index] = value;
        Ok(())
    }

    /// Exchanges the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn swap(&mut self, index: usize, value: &mut T) -> Result<()> {
        self.check_index(index)?;
        core::mem::swap(&mut self.items[index], value);
        Ok(())
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns `FULL` if every slot is occupied.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::full("StoreVec capacity exceeded"));
        }
        self.items[self.count] = value;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if there are no elements.
    pub fn pop(&mut self) -> Result<T> {
        let value = self.peek()?;
        self.count -= 1;
        Ok(value)
    }

    /// Returns a copy of the last element.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if there are no elements.
    pub fn peek(&self) -> Result<T> {
        if self.count == 0 {
            return Err(Error::empty("StoreVec is empty"));
        }
        Ok(self.items[self.count - 1])
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index > len()`, `FULL` if every slot is occupied.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.count {
            return Err(Error::index("Insert position beyond StoreVec length"));
        }
        if self.is_full() {
            return Err(Error::full("StoreVec capacity exceeded"));
        }
        self.items.copy_within(index..self.count, index + 1);
        self.items[index] = value;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let value = self.items[index];
        self.items.copy_within(index + 1..self.count, index);
        self.count -= 1;
        Ok(value)
    }

    /// Index of the first element matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` if no element matches, including when empty.
    pub fn find<P>(&self, pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .position(pred)
            .ok_or(Error::not_found("No StoreVec element matches"))
    }

    /// Index of the last element matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` if no element matches, including when empty.
    pub fn rfind<P>(&self, pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .rposition(pred)
            .ok_or(Error::not_found("No StoreVec element matches"))
    }

    /// Lower bound of `key` among the elements, which must be sorted under
    /// `compare`.
    pub fn search<K, F>(&self, key: &K, compare: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&K, &T) -> Ordering,
    {
        store::search(self.as_slice(), key, compare)
    }

    /// Heap-sorts the elements in place.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches [`store::sort`].
    pub fn sort<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        store::sort(&mut self.items[..self.count], compare)
    }

    /// Reverses the elements in place.
    pub fn reverse(&mut self) {
        self.items[..self.count].reverse();
    }

    /// Applies `policy` to `value` in a vector sorted under `compare`.
    ///
    /// # Errors
    ///
    /// See [`policy::sorted_insert`].
    pub fn sorted_insert<F>(&mut self, value: T, compare: F, policy: InsertPolicy) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        policy::sorted_insert(self, value, compare, policy)
    }

    /// The occupied prefix as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.count]
    }

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(Error::index("StoreVec index out of range"));
        }
        Ok(())
    }
}

impl<T: Copy> SortedStore for StoreVec<'_, T> {
    type Item = T;
    type Value = T;

    fn count(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.items.len()
    }

    fn element(&self, index: usize) -> &T {
        &self.items[index]
    }

    fn value_item(value: &T) -> &T {
        value
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.insert(index, value)
    }

    fn replace_at(&mut self, index: usize, value: T) -> Result<()> {
        self.replace(index, value)
    }
}

impl<'v, T: Copy> IntoIterator for &'v StoreVec<'_, T> {
    type Item = &'v T;
    type IntoIter = core::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_full_vector_rejects_insert() {
        let mut slots: [u8; 3] = [0; 3];
        let mut vec = StoreVec::new(&mut slots).unwrap();
        vec.push(kani::any()).unwrap();
        vec.push(kani::any()).unwrap();
        vec.push(kani::any()).unwrap();

        let before = [vec.items[0], vec.items[1], vec.items[2]];
        let index: usize = kani::any();
        kani::assume(index <= 3);

        assert!(vec.insert(index, kani::any()).is_err());
        assert!(vec.push(kani::any()).is_err());
        assert!(vec.len() == 3);
        assert!(vec.items[0] == before[0]);
        assert!(vec.items[1] == before[1]);
        assert!(vec.items[2] == before[2]);
    }
}

// ============================================================================
// Tests
// ============================================================================
