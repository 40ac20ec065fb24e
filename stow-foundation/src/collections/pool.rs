// Stow - stow-foundation
// Module: Pool - Free-list object pool over borrowed storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size object pool with an intrusive free list.
//!
//! Free slots are chained through the slots themselves, so the pool needs no
//! storage beyond the caller's slice and a head index. Allocation and release
//! are O(1). Handles are plain slot indices: they are `Copy`, pointer-sized
//! and can be passed through queues, including the lock-free ring in
//! `stow-sync`.

use stow_error::{Error, Result};

/// One slot of pool storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSlot<T> {
    /// On the free list; `next` is the following free slot.
    Free {
        /// Next free slot, if any
        next: Option<usize>,
    },
    /// Handed out by [`Pool::alloc`].
    Occupied(T),
}

impl<T> PoolSlot<T> {
    /// A detached free slot, for initializing storage arrays.
    pub const VACANT: Self = Self::Free { next: None };

    /// Returns `true` if the slot holds a live object.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

/// Index of an allocated pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolHandle(usize);

impl PoolHandle {
    /// Slot index inside the owning pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Raw form for transport through integer channels.
    #[must_use]
    pub const fn into_raw(self) -> usize {
        self.0
    }

    /// Rebuilds a handle from [`into_raw`](Self::into_raw). The pool validates
    /// it on every use.
    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }
}

/// Object pool over caller storage.
///
/// # Invariants
///
/// 1. Every slot is either on the free list or occupied, never both
/// 2. `available` equals the length of the free list
/// 3. The free list has no cycles
///
/// # Examples
///
/// ```
/// use stow_foundation::{Pool, PoolSlot};
///
/// let mut slots = [PoolSlot::VACANT; 2];
/// let mut pool = Pool::new(&mut slots)?;
///
/// let a = pool.alloc(10u32)?;
/// let b = pool.alloc(20u32)?;
/// assert!(pool.alloc(30).is_err()); // Exhausted
///
/// *pool.get_mut(a)? += 1;
/// assert_eq!(pool.free(a)?, 11);
/// assert_eq!(pool.get(b)?, &20);
/// # Ok::<(), stow_foundation::Error>(())
/// ```
#[derive(Debug)]
pub struct Pool<'a, T> {
    slots:     &'a mut [PoolSlot<T>],
    free_head: Option<usize>,
    available: usize,
}

impl<'a, T> Pool<'a, T> {
    /// Builds a pool with every slot free.
    ///
    /// Whatever `slots` held before is discarded.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `slots` is empty.
    pub fn new(slots: &'a mut [PoolSlot<T>]) -> Result<Self> {
        if slots.is_empty() {
            return Err(Error::param("Pool needs at least one slot"));
        }
        let mut pool = Self { slots, free_head: None, available: 0 };
        pool.reset();
        Ok(pool)
    }

    /// Puts every slot back on the free list, dropping live objects.
    ///
    /// Slots are pushed in index order, so the highest index is handed out
    /// first afterwards.
    pub fn reset(&mut self) {
        self.free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = PoolSlot::Free { next: self.free_head };
            self.free_head = Some(index);
        }
        self.available = self.slots.len();
    }

    /// Moves `value` into a free slot.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if no slot is free. `value` is dropped in that case.
    pub fn alloc(&mut self, value: T) -> Result<PoolHandle> {
        let Some(index) = self.free_head else {
            return Err(Error::empty("Pool exhausted"));
        };
        let next = match self.slots[index] {
            PoolSlot::Free { next } => next,
            PoolSlot::Occupied(_) => {
                return Err(Error::internal("Pool free list points at a live slot"));
            }
        };
        self.slots[index] = PoolSlot::Occupied(value);
        self.free_head = next;
        self.available -= 1;
        Ok(PoolHandle(index))
    }

    /// Returns the slot behind `handle` to the free list.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `handle` does not belong to this pool and
    /// `NOT_FOUND` if the slot is already free.
    pub fn free(&mut self, handle: PoolHandle) -> Result<T> {
        let index = self.check_handle(handle)?;
        if !self.slots[index].is_occupied() {
            return Err(Error::not_found("Pool slot is already free"));
        }
        let released = core::mem::replace(
            &mut self.slots[index],
            PoolSlot::Free { next: self.free_head },
        );
        self.free_head = Some(index);
        self.available += 1;
        match released {
            PoolSlot::Occupied(value) => Ok(value),
            PoolSlot::Free { .. } => Err(Error::internal("Pool slot changed state")),
        }
    }

    /// Shared access to a live object.
    ///
    /// # Errors
    ///
    /// `PARAM` for a foreign handle, `NOT_FOUND` for a freed slot.
    pub fn get(&self, handle: PoolHandle) -> Result<&T> {
        let index = self.check_handle(handle)?;
        match &self.slots[index] {
            PoolSlot::Occupied(value) => Ok(value),
            PoolSlot::Free { .. } => Err(Error::not_found("Pool slot is free")),
        }
    }

    /// Exclusive access to a live object.
    ///
    /// # Errors
    ///
    /// `PARAM` for a foreign handle, `NOT_FOUND` for a freed slot.
    pub fn get_mut(&mut self, handle: PoolHandle) -> Result<&mut T> {
        let index = self.check_handle(handle)?;
        match &mut self.slots[index] {
            PoolSlot::Occupied(value) => Ok(value),
            PoolSlot::Free { .. } => Err(Error::not_found("Pool slot is free")),
        }
    }

    /// Allocates `value`, runs `f` on it and always releases the slot again.
    ///
    /// Returns what `f` returned together with the final object.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if no slot is free; `f` is not run then.
    pub fn with_item<R, F>(&mut self, value: T, f: F) -> Result<(R, T)>
    where
        F: FnOnce(&mut T) -> R,
    {
        let handle = self.alloc(value)?;
        let outcome = self.get_mut(handle).map(f);
        let value = self.free(handle)?;
        Ok((outcome?, value))
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of free slots.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Number of live objects.
    #[inline]
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.slots.len() - self.available
    }

    fn check_handle(&self, handle: PoolHandle) -> Result<usize> {
        if handle.0 >= self.slots.len() {
            return Err(Error::param("Handle does not belong to this pool"));
        }
        Ok(handle.0)
    }
}
