// Stow - stow-foundation
// Module: Swap primitives
// SW-REQ-ID: REQ_STORE_002
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Byte-block and reference exchange.

/// Exchange the contents of two equally sized byte blocks.
///
/// Blocks of different lengths are left untouched. Two blocks can never
/// alias here, so there is no self-swap case to handle.
#[inline]
pub fn swap_block(a: &mut [u8], b: &mut [u8]) {
    if a.len() != b.len() {
        return;
    }
    a.swap_with_slice(b);
}

/// Exchange two references without touching their referents.
#[inline]
pub fn swap_pointer<'b, T: ?Sized>(a: &mut &'b T, b: &mut &'b T) {
    core::mem::swap(a, b);
}

/// Exchange records `i` and `j` of `item_size` bytes inside `base`.
///
/// Out-of-range indices and `i == j` leave `base` unchanged.
pub fn swap_records(base: &mut [u8], item_size: usize, i: usize, j: usize) {
    if i == j || item_size == 0 {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let Some(hi_start) = hi.checked_mul(item_size) else {
        return;
    };
    let Some(hi_end) = hi_start.checked_add(item_size) else {
        return;
    };
    if hi_end > base.len() {
        return;
    }
    let lo_start = lo * item_size;
    let (head, tail) = base.split_at_mut(hi_start);
    swap_block(&mut head[lo_start..lo_start + item_size], &mut tail[..item_size]);
}
