// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array of owned strings with explicit capacity doubling.
//!
//! `DynamicArray` stores owned copies of the strings handed to it. Every
//! insertion duplicates its input, so the caller keeps ownership of the
//! original value.
//!
//! # Core Guarantees
//!
//! - **Bounded live prefix**: `0 <= len() <= capacity()` after every call, and
//!   only the live prefix `[0, len())` can be read.
//! - **Exact doubling**: a write into a full array grows the capacity to exactly
//!   twice its previous value. Growth moves the owned strings, it never copies
//!   their text. Capacity never decreases.
//! - **All-or-nothing mutation**: `read()`, `insert()` and `remove()` validate
//!   first and fail without touching the array.
//! - **Single owner**: dropping (or `destroy()`ing) the array releases every
//!   element exactly once, then the slot buffer.
//!
//! A requested capacity of zero is coerced to [`MIN_CAPACITY`].
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use strarray::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::with_capacity(1);
//!
//!     array.insert("STRING1", 0)?;
//!     array.append("STRING4");
//!     array.insert("STRING2", 0)?;
//!     array.insert("STRING3", 1)?;
//!     assert_eq!(array.to_display_string(), "[STRING2,STRING3,STRING1,STRING4]");
//!
//!     array.remove("STRING3")?;
//!     assert_eq!(array.to_display_string(), "[STRING2,STRING1,STRING4]");
//!     assert_eq!(array.capacity(), 4);
//!
//!     array.destroy();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Error Handling
//!
//! ```rust
//! use strarray::{DynamicArray, DynamicArrayError};
//!
//! let mut array: DynamicArray = ["a", "b"].into_iter().collect();
//!
//! assert_eq!(
//!     array.read(-1),
//!     Err(DynamicArrayError::IndexOutOfRange { index: -1, count: 2 })
//! );
//! assert_eq!(
//!     array.insert("c", 3),
//!     Err(DynamicArrayError::IndexOutOfRange { index: 3, count: 2 })
//! );
//! assert_eq!(array.remove("missing"), Err(DynamicArrayError::ValueNotFound));
//! assert_eq!(array.len(), 2);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! strarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use `DynamicArrayBehaviour` to test error scenarios.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod dynamic_array;
mod error;
mod index;

#[cfg(test)]
mod tests;

pub use dynamic_array::{DynamicArray, Iter, MIN_CAPACITY};
pub use error::DynamicArrayError;
pub use index::SlotIndex;

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
