// Stow - stow-error
// Module: Stow Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;

use crate::codes;

/// `Error` categories for stow operations
///
/// There is exactly one category per container fault; "no error" is not a
/// category, it is `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Illegal parameter
    Parameter = 1,
    /// Index outside the occupied range
    Index     = 2,
    /// Search or find was unsuccessful
    NotFound  = 3,
    /// Read from an empty container
    Empty     = 4,
    /// Write to a full container
    Full      = 5,
    /// Matching item already exists
    Exists    = 6,
    /// Unexpected internal state
    Internal  = 7,
}

impl ErrorCategory {
    /// The code every error of this category carries.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Parameter => codes::INVALID_PARAMETER,
            Self::Index => codes::INDEX_OUT_OF_RANGE,
            Self::NotFound => codes::NOT_FOUND,
            Self::Empty => codes::CONTAINER_EMPTY,
            Self::Full => codes::CONTAINER_FULL,
            Self::Exists => codes::ALREADY_EXISTS,
            Self::Internal => codes::INTERNAL_ERROR,
        }
    }
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Stow `Error` type
///
/// Categorized error with a numeric code and a static context message. Two
/// errors are equal when their category and code are equal; the message is
/// context only.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Illegal parameter error
    pub const PARAM: Self = Self::new(
        ErrorCategory::Parameter,
        codes::INVALID_PARAMETER,
        "Illegal parameter",
    );
    /// Index out of range error
    pub const INDEX: Self = Self::new(
        ErrorCategory::Index,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );
    /// Not found error
    pub const NOT_FOUND: Self =
        Self::new(ErrorCategory::NotFound, codes::NOT_FOUND, "Item not found");
    /// Empty container error
    pub const EMPTY: Self =
        Self::new(ErrorCategory::Empty, codes::CONTAINER_EMPTY, "Container is empty");
    /// Full container error
    pub const FULL: Self =
        Self::new(ErrorCategory::Full, codes::CONTAINER_FULL, "Container is full");
    /// Already exists error
    pub const EXISTS: Self =
        Self::new(ErrorCategory::Exists, codes::ALREADY_EXISTS, "Item already exists");
    /// Internal error
    pub const INTERNAL: Self = Self::new(
        ErrorCategory::Internal,
        codes::INTERNAL_ERROR,
        "Internal error",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an error of `category` with its canonical code.
    #[must_use]
    pub const fn from_category(category: ErrorCategory, message: &'static str) -> Self {
        Self::new(category, category.code(), message)
    }

    // Factory methods

    /// Create an illegal parameter error
    #[must_use]
    pub const fn param(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Parameter, message)
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Index, message)
    }

    /// Create a not found error
    #[must_use]
    pub const fn not_found(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::NotFound, message)
    }

    /// Create an empty container error
    #[must_use]
    pub const fn empty(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Empty, message)
    }

    /// Create a full container error
    #[must_use]
    pub const fn full(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Full, message)
    }

    /// Create an already exists error
    #[must_use]
    pub const fn exists(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Exists, message)
    }

    /// Create an internal error
    #[must_use]
    pub const fn internal(message: &'static str) -> Self {
        Self::from_category(ErrorCategory::Internal, message)
    }

    /// Get the error category
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_param(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is an index error
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.category == ErrorCategory::Index
    }

    /// Check if this is a not found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.category == ErrorCategory::NotFound
    }

    /// Check if this is an empty container error
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category == ErrorCategory::Empty
    }

    /// Check if this is a full container error
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.category == ErrorCategory::Full
    }

    /// Check if this is an already exists error
    #[must_use]
    pub fn is_exists(&self) -> bool {
        self.category == ErrorCategory::Exists
    }

    /// Check if this is an internal error
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.category == ErrorCategory::Internal
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
