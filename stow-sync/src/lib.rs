#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![doc = "Lock-free single-producer/single-consumer ring for the stow containers."]
#![warn(clippy::missing_panics_doc)]

// Conditionally use `std` for tests or specific features
#[cfg(feature = "std")]
extern crate std;

/// Common imports for this crate.
pub mod prelude;
/// Single-producer/single-consumer ring over caller-supplied atomics.
pub mod spsc;

pub use spsc::{Consumer, Producer, SpscQueue, MAX_STORE_SIZE};
