// Stow - stow-error
// Module: Stow Error Prelude
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for stow-error
//!
//! Re-exports the types every container module needs so that `std` and
//! `no_std` builds import the same names.

pub use core::{
    cmp::Ordering,
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{codes, Error, ErrorCategory, ErrorSource, Result};
