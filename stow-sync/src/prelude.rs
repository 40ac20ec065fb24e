//! Prelude module for stow-sync
//!
//! Unified imports for both std and no_std builds.

pub use core::{
    fmt,
    fmt::Debug,
    sync::atomic::{AtomicUsize, Ordering},
};

pub use stow_error::{Error, Result};
