// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for strarray crates.
//!
//! - [`labels`]: deterministic element values (`STRING1`, `STRING2`, ...).
//! - [`Op`] / [`ReferenceModel`]: an operation log and the expected outcome of
//!   replaying it against a plain `Vec<String>`.
//! - [`strategies`]: proptest strategies producing operation sequences.
//!
//! ## License
//!
//! GPL-3.0-only

mod model;
pub mod strategies;

pub use model::{Op, Outcome, ReferenceModel};

/// Returns `count` labels `STRING1..=STRING{count}`.
pub fn labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("STRING{i}")).collect()
}

/// Returns every index at which an element can be inserted into a sequence
/// of `len` elements (`0..=len`).
pub fn insertion_points(len: usize) -> impl Iterator<Item = usize> {
    0..=len
}

/// Returns the capacity reached after `len` writes starting from `initial`,
/// doubling each time a write finds the array full.
pub fn expected_capacity(initial: usize, len: usize) -> usize {
    let mut capacity = initial.max(1);
    while capacity < len {
        capacity *= 2;
    }
    capacity
}
