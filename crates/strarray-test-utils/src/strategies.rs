// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Proptest strategies for operation sequences.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::Op;

/// Values drawn from a small alphabet so removals hit duplicates often.
pub fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-d]{1,2}",
        "STRING[1-4]",
    ]
}

/// Indices around the live range of short arrays, negative ones included.
pub fn index() -> impl Strategy<Value = i64> {
    -3i64..24
}

/// A single operation.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => index().prop_map(Op::Read),
        3 => (value(), index()).prop_map(|(v, i)| Op::Insert(v, i)),
        3 => value().prop_map(Op::Append),
        2 => value().prop_map(Op::Remove),
    ]
}

/// Up to `max_len` operations.
pub fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    vec(op(), 0..=max_len)
}
