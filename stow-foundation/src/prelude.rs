//! Prelude module for stow-foundation
//!
//! Same imports for `std` and `no_std` builds. Container modules and
//! downstream users can `use stow_foundation::prelude::*;`.

pub use core::{
    cmp::Ordering,
    fmt,
    fmt::Debug,
    mem,
};

pub use stow_error::{codes, Error, ErrorCategory, Result};

pub use crate::{
    collections::{Pool, PoolHandle, PoolSlot, RefQueue, RefVec, StoreQueue, StoreVec},
    policy::{InsertPolicy, MatchRegion, SortedStore},
    store::{Slots, SlotsMut},
};
