//! Fixed-capacity containers over caller-supplied storage.
//!
//! Nothing in this crate allocates, grows or relocates memory. Every
//! container borrows a mutable slice from its caller for its whole lifetime
//! and only manages counts and indices into it. The crate provides:
//! - swap, lower-bound search and in-place heap sort primitives ([`store`])
//! - the sorted-container policy engine ([`policy`])
//! - value and reference vectors, ring queues and a free-list pool
//!   ([`collections`])
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `tracing`: Structured trace events from sort and sorted insertion
//! - `kani`: Formal verification harnesses
//! - Default: Pure `no_std` without allocation and without logging

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core library is always available
extern crate core;

#[cfg(feature = "std")]
extern crate std;

// Stow - stow-foundation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export error related types for convenience
pub use stow_error::{codes, Error, ErrorCategory};

/// Result type alias for stow operations using `stow_error::Error`
pub type StowResult<T> = core::result::Result<T, Error>;

/// Fixed-capacity containers over borrowed storage
pub mod collections;
/// Sorted-container insertion policies
pub mod policy;
/// Swap, search and sort primitives
pub mod store;
/// Structured tracing support
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{Pool, PoolHandle, PoolSlot, RefQueue, RefVec, StoreQueue, StoreVec};
pub use policy::{match_region, sorted_insert, InsertPolicy, MatchRegion, SortedStore};
pub use store::{
    psearch, psort, search, search_records, sort, sort_records, swap_block, swap_pointer,
    Slots, SlotsMut,
};
