// Stow - stow-foundation
// Module: StoreQueue - FIFO ring over borrowed storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! FIFO queue over a caller-supplied slice.
//!
//! `StoreQueue<'a, T>` is a circular buffer over `&'a mut [T]`. Every slot of
//! the slice is usable, so capacity equals the slice length.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is borrowed for the queue's lifetime
//! - **Const-time operations**: `put()`, `get()` and `peek()` are O(1)
//! - **Circular buffer**: head and tail wrap independently
//! - **Explicit failures**: `FULL` and `EMPTY` instead of silent drops

use stow_error::{Error, Result};

/// A FIFO queue with fixed capacity and borrowed storage.
///
/// # Invariants
///
/// 1. `len <= items.len()` always holds
/// 2. `head` and `tail` are always `< items.len()`
/// 3. `tail == (head + len) % items.len()`
///
/// # Examples
///
/// ```
/// use stow_foundation::StoreQueue;
///
/// let mut slots = [0u32; 3];
/// let mut queue = StoreQueue::new(&mut slots)?;
/// queue.put(1)?;
/// queue.put(2)?;
///
/// assert_eq!(queue.get()?, 1);
/// assert_eq!(queue.peek()?, 2);
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), stow_foundation::Error>(())
/// ```
#[derive(Debug)]
pub struct StoreQueue<'a, T: Copy> {
    /// Borrowed storage (circular buffer)
    items: &'a mut [T],

    /// Index of the first element (head)
    head: usize,

    /// Index where next element will be written (tail)
    tail: usize,

    /// Number of elements currently in the queue
    /// Invariant: len <= items.len()
    len: usize,
}

/// A FIFO queue of references; only the references are queued.
pub type RefQueue<'a, 'b, T> = StoreQueue<'a, &'b T>;

impl<'a, T: Copy> StoreQueue<'a, T> {
    /// Creates an empty queue over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PARAM` if `items` has no slots.
    pub fn new(items: &'a mut [T]) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::param("StoreQueue needs at least one slot"));
        }
        Ok(Self { items, head: 0, tail: 0, len: 0 })
    }

    /// Appends an element at the back of the queue.
    ///
    /// # Const-time Guarantee
    ///
    /// O(1); one write and a wraparound.
    ///
    /// # Errors
    ///
    /// Returns `FULL` if the queue is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use stow_foundation::StoreQueue;
    ///
    /// let mut slots = [0u8; 2];
    /// let mut queue = StoreQueue::new(&mut slots)?;
    /// queue.put(1)?;
    /// queue.put(2)?;
    /// assert!(queue.put(3).is_err()); // Full
    /// # Ok::<(), stow_foundation::Error>(())
    /// ```
    #[inline]
    pub fn put(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::full("StoreQueue capacity exceeded"));
        }

        self.items[self.tail] = value;
        self.tail = self.wrap(self.tail + 1);
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if the queue is empty.
    #[inline]
    pub fn get(&mut self) -> Result<T> {
        let value = self.peek()?;
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::empty("StoreQueue is empty"));
        }
        Ok(self.items[self.head])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity, fixed by the borrowed storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.items.len()
    }

    /// Forgets all elements and rewinds head and tail.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns an iterator over the queue in FIFO order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> StoreQueueIter<'_, 'a, T> {
        StoreQueueIter { queue: self, index: 0 }
    }

    #[inline]
    fn wrap(&self, position: usize) -> usize {
        if position == self.items.len() { 0 } else { position }
    }
}

/// FIFO iterator over a [`StoreQueue`].
pub struct StoreQueueIter<'q, 'a, T: Copy> {
    queue: &'q StoreQueue<'a, T>,
    index: usize,
}

impl<'q, T: Copy> Iterator for StoreQueueIter<'q, '_, T> {
    type Item = &'q T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.queue.len {
            let pos = (self.queue.head + self.index) % self.queue.items.len();
            self.index += 1;
            Some(&self.queue.items[pos])
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for StoreQueueIter<'_, '_, T> {}

impl<'q, 'a, T: Copy> IntoIterator for &'q StoreQueue<'a, T> {
    type Item = &'q T;
    type IntoIter = StoreQueueIter<'q, 'a, T>;

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
    fn verify_queue_capacity_enforcement() {
        let mut slots: [u8; 3] = [0; 3];
        let mut queue = StoreQueue::new(&mut slots).unwrap();

        let rotations: u8 = kani::any();
        kani::assume(rotations < 3);
        for _ in 0..rotations {
            queue.put(0).unwrap();
            queue.get().unwrap();
        }

        assert!(queue.put(1).is_ok());
        assert!(queue.put(2).is_ok());
        assert!(queue.put(3).is_ok());
        assert!(queue.put(4).is_err());
        assert!(queue.len() == 3);

        assert!(queue.get() == Ok(1));
        assert!(queue.get() == Ok(2));
        assert!(queue.get() == Ok(3));
        assert!(queue.get().is_err());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() -> Result<()> {
        let mut slots = [0u32; 10];
        let queue = StoreQueue::new(&mut slots)?;
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 10);
        assert!(queue.is_empty());
        Ok(())
    }

    #[test]
    fn test_zero_slots_rejected() {
        let mut slots: [u32; 0] = [];
        assert!(StoreQueue::new(&mut slots).is_err_and(|e| e.is_param()));
    }

    #[test]
    fn test_put_get_fifo() -> Result<()> {
        let mut slots = [0u32; 5];
        let mut queue = StoreQueue::new(&mut slots)?;

        queue.put(1)?;
        queue.put(2)?;
        queue.put(3)?;

        assert_eq!(queue.get()?, 1);
        assert_eq!(queue.get()?, 2);
        assert_eq!(queue.get()?, 3);
        assert_eq!(queue.get(), Err(Error::EMPTY));

        Ok(())
    }

    #[test]
    fn test_circular_buffer() -> Result<()> {
        let mut slots = [0u32; 3];
        let mut queue = StoreQueue::new(&mut slots)?;

        // Fill
        queue.put(1)?;
        queue.put(2)?;
        queue.put(3)?;

        assert_eq!(queue.get()?, 1);
        assert_eq!(queue.get()?, 2);

        // Wraparound
        queue.put(4)?;
        queue.put(5)?;

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);

        assert_eq!(queue.get()?, 3);
        assert_eq!(queue.get()?, 4);
        assert_eq!(queue.get()?, 5);

        Ok(())
    }

    #[test]
    fn test_capacity_exceeded() -> Result<()> {
        let mut slots = [0u32; 2];
        let mut queue = StoreQueue::new(&mut slots)?;

        assert!(queue.put(1).is_ok());
        assert!(queue.put(2).is_ok());
        assert_eq!(queue.put(3), Err(Error::FULL));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek()?, 1);
        Ok(())
    }

    #[test]
    fn test_peek_empty() -> Result<()> {
        let mut slots = [0u32; 2];
        let mut queue = StoreQueue::new(&mut slots)?;
        assert_eq!(queue.peek(), Err(Error::EMPTY));

        queue.put(42)?;
        assert_eq!(queue.peek()?, 42);
        assert_eq!(queue.peek()?, 42); // Doesn't remove
        assert_eq!(queue.len(), 1);
        Ok(())
    }

    #[test]
    fn test_clear_rewinds() -> Result<()> {
        let mut slots = [0u32; 3];
        let mut queue = StoreQueue::new(&mut slots)?;
        queue.put(1)?;
        queue.put(2)?;
        queue.get()?;

        queue.clear();
        assert!(queue.is_empty());
        queue.put(7)?;
        queue.put(8)?;
        queue.put(9)?;
        assert!(queue.is_full());
        assert_eq!(queue.get()?, 7);
        Ok(())
    }

    #[test]
    fn test_ref_queue_moves_references() -> Result<()> {
        let frames = [[1u8; 4], [2u8; 4]];
        let mut slots: [&[u8; 4]; 2] = [&[0; 4]; 2];
        let mut queue: RefQueue<'_, '_, [u8; 4]> = StoreQueue::new(&mut slots)?;

        queue.put(&frames[1])?;
        queue.put(&frames[0])?;
        assert!(core::ptr::eq(queue.get()?, &frames[1]));
        assert_eq!(queue.get()?[0], 1);
        Ok(())
    }
}
