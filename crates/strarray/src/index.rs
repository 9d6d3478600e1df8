// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Conversion of caller indices into slot positions.

/// An integer that can address a slot of a `DynamicArray`.
///
/// Signed integers are accepted so that a negative index is rejected with
/// [`DynamicArrayError::IndexOutOfRange`](crate::DynamicArrayError::IndexOutOfRange)
/// instead of failing to type-check at the call site.
pub trait SlotIndex: Copy {
    /// Returns the slot position, or `None` if the value is negative or does
    /// not fit in `usize`.
    fn to_slot(self) -> Option<usize>;

    /// Returns the value widened to `i128`, as reported in errors.
    fn to_wide(self) -> i128;
}

macro_rules! impl_slot_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SlotIndex for $ty {
                #[inline(always)]
                fn to_slot(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn to_wide(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_slot_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);
