// Stow - stow-error
// Module: Stow Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Stow error handling library
//!
//! Every container operation in the stow workspace reports its outcome with
//! the same small vocabulary. Success is `Ok(_)`; a fault is exactly one
//! [`Error`], identified by its [`ErrorCategory`] and a numeric code from
//! [`codes`].
//!
//! # Error Categories
//!
//! | Category | Meaning |
//! |---|---|
//! | `Parameter` | caller contract violation (zero size, bad tag, foreign handle) |
//! | `Index` | index outside the occupied range |
//! | `NotFound` | search or policy found no matching element |
//! | `Empty` | read from an empty container |
//! | `Full` | write to a container at capacity |
//! | `Exists` | unique insertion found a matching element |
//! | `Internal` | state that is unreachable when the above are honored |
//!
//! # Usage
//!
//! ```
//! use stow_error::{codes, Error, ErrorCategory, Result};
//!
//! fn reserve(len: usize, capacity: usize) -> Result<()> {
//!     if len >= capacity {
//!         return Err(Error::full("buffer is at capacity"));
//!     }
//!     Ok(())
//! }
//!
//! let err = reserve(4, 4).unwrap_err();
//! assert!(err.is_full());
//! assert_eq!(err.category, ErrorCategory::Full);
//! assert_eq!(err.code, codes::CONTAINER_FULL);
//! assert_eq!(err, Error::FULL);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for stow
pub mod codes;
/// Error and error category types
pub mod errors;
pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for stow operations.
///
/// `Ok` is the "no error" outcome; every fault is a `stow_error::Error`.
pub type Result<T> = core::result::Result<T, Error>;
