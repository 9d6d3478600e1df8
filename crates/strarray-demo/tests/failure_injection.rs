// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use strarray::{DynamicArray, DynamicArrayBehaviour};
use strarray_demo::run_on;

fn run_with(behaviour: DynamicArrayBehaviour) -> (String, String) {
    let mut array = DynamicArray::with_capacity(1);
    array.change_behaviour(behaviour);

    let mut out = Vec::new();
    let mut err = Vec::new();
    run_on(array, &mut out, &mut err).expect("Failed to run_on(..)");

    (
        String::from_utf8(out).expect("stdout is not utf-8"),
        String::from_utf8(err).expect("stderr is not utf-8"),
    )
}

#[test]
fn test_failed_removal_is_reported_and_sequence_continues() {
    let (out, err) = run_with(DynamicArrayBehaviour::FailAtRemove);

    // STRING3 survives the injected failure
    assert_eq!(
        out.lines().nth(3),
        Some("[STRING2,STRING3,STRING1,STRING4]")
    );
    assert_eq!(err.matches("remove: value not found").count(), 2);
}

#[test]
fn test_failed_inserts_are_reported() {
    let (out, err) = run_with(DynamicArrayBehaviour::FailAtInsert);

    // Only the append lands
    assert!(out.contains("[STRING4]"));
    assert_eq!(err.lines().filter(|l| l.starts_with("insert:")).count(), 3);
}

#[test]
fn test_failed_reads_go_to_error_stream_only() {
    let (out, err) = run_with(DynamicArrayBehaviour::FailAtRead);

    assert!(!out.contains("read["));
    assert_eq!(err.lines().filter(|l| l.starts_with("read:")).count(), 4);
}
