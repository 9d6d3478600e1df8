// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for strarray.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
///
/// Every variant is raised before any mutation takes place: an operation that
/// returns an error leaves the array exactly as it found it.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The index is negative, or not below the bound allowed by the operation
    /// (`count` for reads, `count + 1` for inserts).
    ///
    /// The index is widened to `i128` so negative caller indices are reported
    /// as given.
    #[error("index {index} out of range for array of {count} elements")]
    IndexOutOfRange {
        /// The index supplied by the caller.
        index: i128,
        /// Number of live elements at the time of the call.
        count: usize,
    },

    /// No element compares equal to the value passed to `remove()`.
    #[error("value not found")]
    ValueNotFound,
}
