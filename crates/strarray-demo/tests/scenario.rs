// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod scenario_tests {
    use strarray_demo::{DEFAULT_CAPACITY, DemoError, parse_capacity, run};

    fn run_to_strings(capacity: usize) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(capacity, &mut out, &mut err).expect("Failed to run(..)");

        (
            String::from_utf8(out).expect("stdout is not utf-8"),
            String::from_utf8(err).expect("stderr is not utf-8"),
        )
    }

    #[test]
    fn test_output_stream() {
        let (out, _) = run_to_strings(1);

        assert_eq!(
            out,
            "read[0] = STRING1\n\
             read[0] = STRING1\n\
             [STRING2,STRING3,STRING1,STRING4]\n\
             [STRING2,STRING1,STRING4]\n\
             len = 3, capacity = 4\n"
        );
    }

    #[test]
    fn test_error_stream() {
        let (_, err) = run_to_strings(1);

        assert_eq!(
            err,
            "read: index -1 out of range for array of 3 elements\n\
             read: index 3 out of range for array of 3 elements\n\
             remove: value not found\n"
        );
    }

    #[test]
    fn test_errors_never_reach_output_stream() {
        let (out, _) = run_to_strings(1);

        assert!(!out.contains("out of range"));
        assert!(!out.contains("not found"));
    }

    #[test]
    fn test_zero_capacity_behaves_like_one() {
        assert_eq!(run_to_strings(0), run_to_strings(1));
    }

    #[test]
    fn test_large_capacity_never_grows() {
        let (out, _) = run_to_strings(16);

        assert!(out.ends_with("len = 3, capacity = 16\n"));
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity(Vec::<String>::new()), Ok(DEFAULT_CAPACITY));
        assert_eq!(parse_capacity(["8"]), Ok(8));
        assert_eq!(parse_capacity([" 3 "]), Ok(3));
        assert_eq!(
            parse_capacity(["-1"]),
            Err(DemoError::InvalidCapacity(String::from("-1")))
        );
        assert_eq!(
            parse_capacity(["abc"]),
            Err(DemoError::InvalidCapacity(String::from("abc")))
        );
        assert_eq!(
            parse_capacity(["1", "2"]),
            Err(DemoError::UnexpectedArgument(String::from("2")))
        );
    }
}
