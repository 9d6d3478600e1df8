// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Demonstration driver for `strarray`.
//!
//! Runs a fixed sequence of calls against one `DynamicArray`. Renderings and
//! read values go to `out`; every error goes to `err`, so a failing call never
//! interleaves with the rendered array.

use std::io::{self, Write};

use strarray::{DynamicArray, DynamicArrayError, SlotIndex};
use thiserror::Error;

/// Initial capacity used when none is given on the command line.
pub const DEFAULT_CAPACITY: usize = 1;

/// Errors from the demo command line.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DemoError {
    /// The capacity argument is not a non-negative integer.
    #[error("invalid capacity {0:?}: expected a non-negative integer")]
    InvalidCapacity(String),

    /// More than one positional argument was given.
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

/// Parses the optional capacity argument.
pub fn parse_capacity<I, S>(args: I) -> Result<usize, DemoError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();

    let capacity = match args.next() {
        None => DEFAULT_CAPACITY,
        Some(arg) => {
            let arg = arg.as_ref();
            arg.trim()
                .parse()
                .map_err(|_| DemoError::InvalidCapacity(arg.to_owned()))?
        }
    };

    if let Some(extra) = args.next() {
        return Err(DemoError::UnexpectedArgument(extra.as_ref().to_owned()));
    }

    Ok(capacity)
}

fn report<E: Write>(err: &mut E, op: &str, error: DynamicArrayError) -> io::Result<()> {
    writeln!(err, "{op}: {error}")
}

fn read<I, O, E>(array: &DynamicArray, index: I, out: &mut O, err: &mut E) -> io::Result<()>
where
    I: SlotIndex + core::fmt::Display,
    O: Write,
    E: Write,
{
    match array.read(index) {
        Ok(value) => writeln!(out, "read[{index}] = {value}"),
        Err(e) => report(err, "read", e),
    }
}

fn insert<I, E>(array: &mut DynamicArray, value: &str, index: I, err: &mut E) -> io::Result<()>
where
    I: SlotIndex,
    E: Write,
{
    match array.insert(value, index) {
        Ok(()) => Ok(()),
        Err(e) => report(err, "insert", e),
    }
}

fn remove<E: Write>(array: &mut DynamicArray, value: &str, err: &mut E) -> io::Result<()> {
    match array.remove(value) {
        Ok(()) => Ok(()),
        Err(e) => report(err, "remove", e),
    }
}

/// Runs the demonstration on a fresh array with `initial_capacity` slots.
pub fn run<O: Write, E: Write>(
    initial_capacity: usize,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    run_on(DynamicArray::with_capacity(initial_capacity), out, err)
}

/// Runs the demonstration on `array`, destroying it at the end.
///
/// Failed calls are reported on `err` and the sequence continues.
pub fn run_on<O: Write, E: Write>(
    mut array: DynamicArray,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    insert(&mut array, "STRING1", 0, err)?;
    array.append("STRING4");
    read(&array, 0, out, err)?;
    read(&array, 0, out, err)?;
    insert(&mut array, "STRING2", 0, err)?;
    insert(&mut array, "STRING3", 1, err)?;
    writeln!(out, "{array}")?;

    remove(&mut array, "STRING3", err)?;
    writeln!(out, "{array}")?;

    // Error paths
    read(&array, -1, out, err)?;
    read(&array, array.len(), out, err)?;
    remove(&mut array, "MISSING", err)?;

    writeln!(out, "len = {}, capacity = {}", array.len(), array.capacity())?;

    array.destroy();
    Ok(())
}
