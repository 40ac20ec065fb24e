// Stow - stow-foundation
// Module: Collections over caller-supplied storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Containers over borrowed storage.
//!
//! Every container here borrows a caller slice for its whole lifetime. None
//! of them allocate, grow or reallocate.
//!
//! # Available Collections
//!
//! | Type | Description | Failure modes |
//! |------|-------------|---------------|
//! | [`StoreVec`] | Vector of `Copy` values, sortable, policy inserts | `INDEX`, `FULL`, `EMPTY` |
//! | [`RefVec`] | Vector of references ordered by referent | `INDEX`, `FULL`, `EMPTY` |
//! | [`StoreQueue`] | FIFO ring of `Copy` values | `FULL`, `EMPTY` |
//! | [`RefQueue`] | FIFO ring of references | `FULL`, `EMPTY` |
//! | [`Pool`] | Free-list object pool with index handles | `EMPTY`, `PARAM`, `NOT_FOUND` |

mod pool;
mod ref_vec;
mod store_queue;
mod store_vec;

pub use pool::{Pool, PoolHandle, PoolSlot};
pub use ref_vec::RefVec;
pub use store_queue::{RefQueue, StoreQueue, StoreQueueIter};
pub use store_vec::StoreVec;
