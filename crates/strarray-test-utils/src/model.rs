// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// One call against a string array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `read(index)`
    Read(i64),
    /// `insert(value, index)`
    Insert(String, i64),
    /// `append(value)`
    Append(String),
    /// `remove(value)`
    Remove(String),
}

/// Expected result of applying an [`Op`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The read returned this value.
    Value(String),
    /// The mutation succeeded.
    Done,
    /// The index was negative or past the allowed bound.
    IndexOutOfRange,
    /// No element equals the value to remove.
    ValueNotFound,
}

/// Plain `Vec<String>` model of a growable string array.
///
/// Tracks the capacity a doubling array would have after the same operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceModel {
    elements: Vec<String>,
    capacity: usize,
}

impl ReferenceModel {
    /// Creates an empty model with `capacity` slots (zero is coerced to one).
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the elements in order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Returns the expected capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn reserve_one(&mut self) {
        if self.elements.len() == self.capacity {
            self.capacity *= 2;
        }
    }

    /// Applies `op` and returns its expected outcome.
    pub fn apply(&mut self, op: &Op) -> Outcome {
        match op {
            Op::Read(index) => match usize::try_from(*index) {
                Ok(i) if i < self.elements.len() => Outcome::Value(self.elements[i].clone()),
                _ => Outcome::IndexOutOfRange,
            },
            Op::Insert(value, index) => match usize::try_from(*index) {
                Ok(i) if i <= self.elements.len() => {
                    self.reserve_one();
                    self.elements.insert(i, value.clone());
                    Outcome::Done
                }
                _ => Outcome::IndexOutOfRange,
            },
            Op::Append(value) => {
                self.reserve_one();
                self.elements.push(value.clone());
                Outcome::Done
            }
            Op::Remove(value) => match self.elements.iter().position(|e| e == value) {
                Some(i) => {
                    self.elements.remove(i);
                    Outcome::Done
                }
                None => Outcome::ValueNotFound,
            },
        }
    }
}
