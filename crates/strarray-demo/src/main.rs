// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Usage: strarray-demo [INITIAL_CAPACITY]
//
// Display output goes to stdout, errors to stderr.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let capacity = match strarray_demo::parse_capacity(std::env::args().skip(1)) {
        Ok(capacity) => capacity,
        Err(e) => {
            eprintln!("strarray-demo: {e}");
            eprintln!("usage: strarray-demo [INITIAL_CAPACITY]");
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();

    match strarray_demo::run(capacity, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("strarray-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
