// Stow - stow-foundation
// Module: Internal macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Emit a `trace`-level event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not carry side effects.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::trace!($($arg)*);
        }
    };
}

/// Enter a `trace`-level span for the rest of the enclosing block when the
/// `tracing` feature is enabled.
macro_rules! trace_scope {
    ($span:expr) => {
        #[cfg(feature = "tracing")]
        let _span_guard = $span.entered();
    };
}
