// Stow - stow-foundation
// Module: RefVec - Reference vector over borrowed storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity vector of references in caller-supplied storage.
//!
//! `RefVec<'a, 'b, T>` stores `&'b T` in a borrowed `&'a mut [&'b T]`.
//! Sorting, searching and the policy engine compare the referents, and
//! only the references ever move.

use core::cmp::Ordering;

use stow_error::{Error, Result};

use crate::policy::{self, InsertPolicy, SortedStore};
use crate::store;

/// A vector of shared references with fixed capacity and borrowed storage.
///
/// Slots beyond `len()` hold placeholder references the caller chose when
/// building the storage; they are never handed out.
///
/// # Examples
///
/// ```
/// use stow_foundation::{InsertPolicy, RefVec};
///
/// let names = ["lynx", "ibis", "wren"];
/// let mut slots = [""; 4];
/// let mut vec = RefVec::new(&mut slots)?;
/// for name in names {
///     vec.sorted_insert(name, |a, b| a.cmp(b), InsertPolicy::Any)?;
/// }
/// assert_eq!(vec.as_slice(), &["ibis", "lynx", "wren"]);
/// # Ok::<(), stow_foundation::Error>(())
/// ```
#[derive(Debug)]
pub struct RefVec<'a, 'b, T: ?Sized> {
    /// Borrowed backing storage
    items: &'a mut [&'b T],

    /// Number of occupied slots
    /// Invariant: count <= items.len()
    count: usize,
}

impl<'a, 'b, T: ?Sized> RefVec<'a, 'b, T> {
    /// Creates an empty vector over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `items` has no slots.
    pub fn new(items: &'a mut [&'b T]) -> Result<Self> {
        Self::from_initialized(items, 0)
    }

    /// Adopts the first `count` references in `items` as existing elements.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `items` has no slots or `count` exceeds them.
    pub fn from_initialized(items: &'a mut [&'b T], count: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::param("RefVec needs at least one slot"));
        }
        if count > items.len() {
            return Err(Error::param("Initial count exceeds RefVec capacity"));
        }
        Ok(Self { items, count })
    }

    /// Returns the capacity, fixed by the borrowed storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of references held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no references.
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

    /// Forgets every reference. The referents are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Returns the reference stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&'b T> {
        self.check_index(index)?;
        Ok(self.items[index])
    }

    /// Overwrites the reference at `index`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn replace(&mut self, index: usize, value: &'b T) -> Result<()> {
        self.check_index(index)?;
        self.items[index] = value;
        Ok(())
    }

    /// Exchanges the reference at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn swap(&mut self, index: usize, value: &mut &'b T) -> Result<()> {
        self.check_index(index)?;
        store::swap_pointer(&mut self.items[index], value);
        Ok(())
    }

    /// Appends `value` after the last reference.
    ///
    /// # Errors
    ///
    /// Returns `FULL` if every slot is occupied.
    pub fn push(&mut self, value: &'b T) -> Result<()> {
        if self.is_full() {
            return Err(Error::full("RefVec capacity exceeded"));
        }
        self.items[self.count] = value;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the last reference.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if there are no elements.
    pub fn pop(&mut self) -> Result<&'b T> {
        let value = self.peek()?;
        self.count -= 1;
        Ok(value)
    }

    /// Returns the last reference without removing it.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if there are no elements.
    pub fn peek(&self) -> Result<&'b T> {
        if self.count == 0 {
            return Err(Error::empty("RefVec is empty"));
        }
        Ok(self.items[self.count - 1])
    }

    /// Inserts `value` at `index`, shifting later references right.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index > len()`, `FULL` if every slot is occupied.
    pub fn insert(&mut self, index: usize, value: &'b T) -> Result<()> {
        if index > self.count {
            return Err(Error::index("Insert position beyond RefVec length"));
        }
        if self.is_full() {
            return Err(Error::full("RefVec capacity exceeded"));
        }
        self.items.copy_within(index..self.count, index + 1);
        self.items[index] = value;
        self.count += 1;
        Ok(())
    }

    /// Removes the reference at `index`, shifting later references left.
    ///
    /// # Errors
    ///
    /// Returns `INDEX` if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<&'b T> {
        self.check_index(index)?;
        let value = self.items[index];
        self.items.copy_within(index + 1..self.count, index);
        self.count -= 1;
        Ok(value)
    }

    /// Index of the first referent matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` if none matches.
    pub fn find<P>(&self, mut pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .position(|item| pred(*item))
            .ok_or(Error::not_found("No RefVec element matches"))
    }

    /// Index of the last referent matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` if none matches.
    pub fn rfind<P>(&self, mut pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .rposition(|item| pred(*item))
            .ok_or(Error::not_found("No RefVec element matches"))
    }

    /// Lower bound of `key` among the referents.
    pub fn search<K, F>(&self, key: &K, compare: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&K, &T) -> Ordering,
    {
        store::psearch(self.as_slice(), key, compare)
    }

    /// Heap-sorts the references by their referents.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches [`store::psort`].
    pub fn sort<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        store::psort(&mut self.items[..self.count], compare)
    }

    /// Reverses the order of the references in place.
    pub fn reverse(&mut self) {
        self.items[..self.count].reverse();
    }

    /// Applies `policy` to `value` in a vector sorted under `compare`.
    ///
    /// # Errors
    ///
    /// See [`policy::sorted_insert`].
    pub fn sorted_insert<F>(&mut self, value: &'b T, compare: F, policy: InsertPolicy) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        policy::sorted_insert(self, value, compare, policy)
    }

    /// The occupied references as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[&'b T] {
        &self.items[..self.count]
    }

    /// Iterates over the referents front to back.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'b T> + '_ {
        self.as_slice().iter().copied()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(Error::index("RefVec index out of range"));
        }
        Ok(())
    }
}

impl<'b, T: ?Sized> SortedStore for RefVec<'_, 'b, T> {
    type Item = T;
    type Value = &'b T;

    fn count(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.items.len()
    }

    fn element(&self, index: usize) -> &T {
        self.items[index]
    }

    fn value_item<'v>(value: &'v &'b T) -> &'v T {
        value
    }

    fn insert_at(&mut self, index: usize, value: &'b T) -> Result<()> {
        self.insert(index, value)
    }

    fn replace_at(&mut self, index: usize, value: &'b T) -> Result<()> {
        self.replace(index, value)
    }
}
