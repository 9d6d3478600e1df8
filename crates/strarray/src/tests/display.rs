// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::DynamicArray;

#[test]
fn test_display_empty() {
    assert_eq!(DynamicArray::new().to_display_string(), "[]");
}

#[test]
fn test_display_single() {
    let array: DynamicArray = ["STRING1"].into_iter().collect();

    assert_eq!(array.to_display_string(), "[STRING1]");
}

#[test]
fn test_display_preserves_order() {
    let array: DynamicArray = ["STRING2", "STRING3", "STRING1", "STRING4"]
        .into_iter()
        .collect();

    assert_eq!(
        array.to_display_string(),
        "[STRING2,STRING3,STRING1,STRING4]"
    );
    assert_eq!(format!("{array}"), array.to_display_string());
}

#[test]
fn test_display_does_not_render_unused_slots() {
    let mut array = DynamicArray::with_capacity(4);
    array.extend(["a", "b", "c"]);
    array.remove("c").expect("Failed to remove(..)");

    assert_eq!(array.to_display_string(), "[a,b]");
}

#[test]
fn test_display_is_read_only() {
    let array: DynamicArray = ["a", "b"].into_iter().collect();
    let before = array.clone();

    let _ = array.to_display_string();
    let _ = array.to_display_string();

    assert_eq!(array, before);
    assert_eq!(array.capacity(), before.capacity());
}

#[test]
fn test_debug_shows_len_and_capacity_only() {
    let mut array = DynamicArray::with_capacity(4);
    array.append("hidden");

    assert_eq!(format!("{array:?}"), "DynamicArray { len: 1, capacity: 4 }");
}
