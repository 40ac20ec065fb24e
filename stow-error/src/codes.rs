// Stow - stow-error
// Module: Stow Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for stow
//!
//! Codes are stable across releases. Container faults live in 1000-1099.

/// Illegal parameter (zero size, invalid tag, foreign handle)
pub const INVALID_PARAMETER: u16 = 1000;
/// Index out of bounds of the occupied range
pub const INDEX_OUT_OF_RANGE: u16 = 1001;
/// Search or find was unsuccessful
pub const NOT_FOUND: u16 = 1002;
/// Attempted to read from an empty container
pub const CONTAINER_EMPTY: u16 = 1003;
/// Attempted to write to a full container
pub const CONTAINER_FULL: u16 = 1004;
/// Item already exists (unique insertion)
pub const ALREADY_EXISTS: u16 = 1005;
/// An unexpected internal error occurred
pub const INTERNAL_ERROR: u16 = 1006;

/// Returns `true` if `code` is one of the container fault codes above.
#[must_use]
pub const fn is_container_code(code: u16) -> bool {
    code >= INVALID_PARAMETER && code <= INTERNAL_ERROR
}
