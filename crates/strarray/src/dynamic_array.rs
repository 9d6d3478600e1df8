// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::DynamicArrayError;
use crate::index::SlotIndex;

/// Smallest capacity a `DynamicArray` can have.
///
/// A requested capacity of zero is coerced to this value, so doubling always
/// makes room.
pub const MIN_CAPACITY: usize = 1;

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use strarray::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
///     #[test]
///     fn test_handles_read_failure() {
///         let mut array = DynamicArray::with_capacity(4);
///         array.append("a");
///         array.change_behaviour(DynamicArrayBehaviour::FailAtRead);
///
///         // Test that your code handles the error correctly
///         assert!(matches!(
///             array.read(0),
///             Err(DynamicArrayError::IndexOutOfRange { .. })
///         ));
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `read()` fails with `IndexOutOfRange`.
    FailAtRead,
    /// Every `insert()` fails with `IndexOutOfRange`.
    FailAtInsert,
    /// Every `remove()` fails with `ValueNotFound`.
    FailAtRemove,
}

/// Growable array of owned strings with explicit capacity.
///
/// Live elements occupy the prefix `[0, len())` of the slot buffer. Slots in
/// `[len(), capacity())` are unused and cannot be addressed: every read goes
/// through the live prefix only.
///
/// When a write finds the array full, the slot buffer is reallocated with
/// exactly twice the capacity:
/// 1. Allocates a new buffer of `2 * capacity` slots
/// 2. Moves the owned strings into it (the text is not copied)
/// 3. Releases the old, now empty, buffer
///
/// The capacity never decreases.
///
/// # Example
///
/// ```rust
/// use strarray::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::with_capacity(1);
///     array.insert("STRING1", 0)?;
///     array.append("STRING4");
///
///     assert_eq!(array.capacity(), 2);
///     assert_eq!(array.read(1)?, "STRING4");
///     assert_eq!(array.to_display_string(), "[STRING1,STRING4]");
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray {
    // Invariant: slots.len() <= capacity <= slots.capacity()
    slots: Vec<String>,
    capacity: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl DynamicArray {
    /// Creates a new empty `DynamicArray` with [`MIN_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates a new empty `DynamicArray` with the specified capacity.
    ///
    /// A capacity of zero is coerced to [`MIN_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal: it aborts through the global allocator,
    /// or panics with `capacity overflow` if the buffer size is not
    /// representable.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);

        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Doubles the capacity, moving every live element into the new buffer.
    ///
    /// `len()` is unchanged. Only the `String` handles move; the text they
    /// own stays where it is.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = match self.capacity.checked_mul(2) {
            Some(new_capacity) => new_capacity,
            None => capacity_overflow(),
        };

        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(self.slots.drain(..));

        // Old buffer is empty at this point; dropping it releases no element.
        self.slots = slots;
        self.capacity = new_capacity;
    }

    #[inline(always)]
    fn maybe_grow(&mut self) {
        if self.len() < self.capacity {
            return;
        }

        self.grow();
    }

    #[inline(always)]
    fn out_of_range<I: SlotIndex>(&self, index: I) -> DynamicArrayError {
        DynamicArrayError::IndexOutOfRange {
            index: index.to_wide(),
            count: self.len(),
        }
    }

    /// Returns the element at `index` without transferring ownership.
    ///
    /// The returned borrow ends before the next mutation of the array.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `index` is negative
    /// or `index >= len()`.
    pub fn read<I: SlotIndex>(&self, index: I) -> Result<&str, DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == DynamicArrayBehaviour::FailAtRead {
            return Err(self.out_of_range(index));
        }

        index
            .to_slot()
            .and_then(|slot| self.slots.get(slot))
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Inserts a copy of `value` at `index`, shifting the elements at
    /// `[index, len())` one position to the right.
    ///
    /// `index == len()` appends. Grows first if the array is full, so the
    /// shift always has a free slot at the end.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `index` is negative
    /// or `index > len()`. The array is unchanged.
    pub fn insert<I: SlotIndex>(
        &mut self,
        value: &str,
        index: I,
    ) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == DynamicArrayBehaviour::FailAtInsert {
            return Err(self.out_of_range(index));
        }

        let slot = match index.to_slot() {
            Some(slot) if slot <= self.len() => slot,
            _ => return Err(self.out_of_range(index)),
        };

        self.maybe_grow();
        debug_assert!(self.slots.capacity() > self.len());

        self.slots.insert(slot, value.to_owned());

        Ok(())
    }

    /// Appends a copy of `value` at the end of the array.
    pub fn append(&mut self, value: &str) {
        self.maybe_grow();
        self.slots.push(value.to_owned());
    }

    /// Returns the index of the first element equal to `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.slots.iter().position(|element| element == value)
    }

    /// Returns `true` if some element is equal to `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    /// Removes the first (lowest index) element equal to `value`.
    ///
    /// The removed string is released and the elements after it shift one
    /// position to the left. Later duplicates are left untouched. Capacity is
    /// not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::ValueNotFound`] if no element equals
    /// `value`. The array is unchanged.
    pub fn remove(&mut self, value: &str) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == DynamicArrayBehaviour::FailAtRemove {
            return Err(DynamicArrayError::ValueNotFound);
        }

        let matched = self
            .position(value)
            .ok_or(DynamicArrayError::ValueNotFound)?;

        // Shifts [matched + 1, len()) left; the vacated tail slot leaves the live prefix.
        drop(self.slots.remove(matched));

        Ok(())
    }

    /// Releases every element, then the slot buffer.
    ///
    /// Equivalent to dropping the array. Taking `self` by value makes a second
    /// call impossible.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Renders the elements as `[a,b,c]`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend(self.slots.iter().cloned());

        Self {
            slots,
            capacity: self.capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: self.behaviour,
        }
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        // Capacity and behaviour are not part of the value
        self.slots == other.slots
    }
}

impl Eq for DynamicArray {}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            f.write_str(element)?;
        }

        f.write_str("]")
    }
}

impl<S: AsRef<str>> Extend<S> for DynamicArray {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for value in iter {
            self.append(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DynamicArray {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

/// Borrowing iterator over the elements of a [`DynamicArray`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
