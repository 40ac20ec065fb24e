// Stow - stow-sync
// Module: Lock-free SPSC ring
// SW-REQ-ID: REQ_RESOURCE_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Lock-free single-producer/single-consumer ring.
//!
//! The ring stores pointer-sized items (`usize`), which covers indices,
//! pool handles and other plain tokens. One slot is always kept empty to
//! tell "full" from "empty", so capacity is one less than the store size.
//!
//! Only the producer writes `tail` and only the consumer writes `head`. The
//! producer fills a slot and then publishes it with a `Release` store of
//! `tail`; the consumer `Acquire`-loads `tail` before reading the slot and
//! hands the slot back with a `Release` store of `head`.

use crate::prelude::{fmt, AtomicUsize, Error, Ordering, Result};

/// Largest accepted store size.
pub const MAX_STORE_SIZE: usize = 1 << 16;

/// A bounded SPSC ring over caller-supplied atomic slots.
///
/// The ring itself has no `put`/`get`: those live on the [`Producer`] and
/// [`Consumer`] halves returned by [`split`](Self::split), so the type system
/// enforces one producer and one consumer.
///
/// # Examples
///
/// ```
/// use core::sync::atomic::AtomicUsize;
/// use stow_sync::SpscQueue;
///
/// let store = [const { AtomicUsize::new(0) }; 4];
/// let mut ring = SpscQueue::new(&store)?;
/// let (mut tx, mut rx) = ring.split();
///
/// tx.put(7)?;
/// tx.put(8)?;
/// assert_eq!(rx.get()?, 7);
/// assert_eq!(rx.get()?, 8);
/// assert!(rx.get().is_err());
/// # Ok::<(), stow_error::Error>(())
/// ```
pub struct SpscQueue<'a> {
    store: &'a [AtomicUsize],
    mask:  usize,
    head:  AtomicUsize,
    tail:  AtomicUsize,
}

impl<'a> SpscQueue<'a> {
    /// Creates an empty ring over `store`.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` unless `store.len()` is a power of two between 2 and
    /// [`MAX_STORE_SIZE`].
    pub fn new(store: &'a [AtomicUsize]) -> Result<Self> {
        let size = store.len();
        if size < 2 || size > MAX_STORE_SIZE || !size.is_power_of_two() {
            return Err(Error::param("SPSC store size must be a power of two in 2..=65536"));
        }
        Ok(Self { store, mask: size - 1, head: AtomicUsize::new(0), tail: AtomicUsize::new(0) })
    }

    /// Maximum number of queued items.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.mask
    }

    /// Number of queued items. A snapshot when the halves are in use.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        let tail = self.tail.load(Ordering::Acquire);
        let head = self.head.load(Ordering::Acquire);
        tail.wrapping_sub(head) & self.mask
    }

    /// `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the ring holds `capacity()` items.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == self.mask
    }

    /// Drops every queued item.
    ///
    /// Needs exclusive access, so it cannot race with either half.
    pub fn reset(&mut self) {
        *self.head.get_mut() = 0;
        *self.tail.get_mut() = 0;
    }

    /// Splits the ring into its producer and consumer halves.
    ///
    /// Both halves borrow the ring, so `reset` is unavailable until they are
    /// dropped. Each half may move to a different thread.
    pub fn split(&mut self) -> (Producer<'_, 'a>, Consumer<'_, 'a>) {
        let ring: &SpscQueue<'a> = self;
        (Producer { ring }, Consumer { ring })
    }
}

impl fmt::Debug for SpscQueue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpscQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head.load(Ordering::Relaxed))
            .field("tail", &self.tail.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Writing half of an [`SpscQueue`].
#[derive(Debug)]
pub struct Producer<'r, 'a> {
    ring: &'r SpscQueue<'a>,
}

impl Producer<'_, '_> {
    /// Enqueues `item`.
    ///
    /// # Errors
    ///
    /// Returns `FULL` if the consumer has not freed a slot yet.
    pub fn put(&mut self, item: usize) -> Result<()> {
        let ring = self.ring;
        let tail = ring.tail.load(Ordering::Relaxed);
        let next = (tail + 1) & ring.mask;
        if next == ring.head.load(Ordering::Acquire) {
            return Err(Error::full("SPSC ring is full"));
        }
        ring.store[tail].store(item, Ordering::Relaxed);
        ring.tail.store(next, Ordering::Release);
        Ok(())
    }

    /// `true` if `put` would currently fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Capacity of the underlying ring.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

/// Reading half of an [`SpscQueue`].
#[derive(Debug)]
pub struct Consumer<'r, 'a> {
    ring: &'r SpscQueue<'a>,
}

impl Consumer<'_, '_> {
    /// Dequeues the oldest item.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if nothing has been published.
    pub fn get(&mut self) -> Result<usize> {
        let item = self.peek()?;
        let ring = self.ring;
        let head = ring.head.load(Ordering::Relaxed);
        ring.head.store((head + 1) & ring.mask, Ordering::Release);
        Ok(item)
    }

    /// Reads the oldest item without dequeuing it.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if nothing has been published.
    pub fn peek(&self) -> Result<usize> {
        let ring = self.ring;
        let head = ring.head.load(Ordering::Relaxed);
        if head == ring.tail.load(Ordering::Acquire) {
            return Err(Error::empty("SPSC ring is empty"));
        }
        Ok(ring.store[head].load(Ordering::Relaxed))
    }

    /// Number of items ready to be read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// `true` if `get` would currently fail.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
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
    fn verify_spsc_capacity() {
        let store = [const { AtomicUsize::new(0) }; 4];
        let mut ring = SpscQueue::new(&store).unwrap();
        let (mut tx, mut rx) = ring.split();

        assert!(tx.put(kani::any()).is_ok());
        assert!(tx.put(kani::any()).is_ok());
        assert!(tx.put(kani::any()).is_ok());
        assert!(tx.put(kani::any()).is_err());
        assert!(rx.len() == 3);

        assert!(rx.get().is_ok());
        assert!(tx.put(kani::any()).is_ok());
        assert!(tx.is_full());
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_spsc_fifo_order() {
        let store = [const { AtomicUsize::new(0) }; 2];
        let mut ring = SpscQueue::new(&store).unwrap();
        let (mut tx, mut rx) = ring.split();

        let first: usize = kani::any();
        let second: usize = kani::any();

        // Capacity 1: every put must be drained before the next
        assert!(tx.put(first).is_ok());
        assert!(tx.put(second).is_err());
        assert!(rx.get() == Ok(first));
        assert!(tx.put(second).is_ok());
        assert!(rx.get() == Ok(second));
        assert!(rx.get().is_err());
    }
}

// ============================================================================
// Tests
// ============================================================================
