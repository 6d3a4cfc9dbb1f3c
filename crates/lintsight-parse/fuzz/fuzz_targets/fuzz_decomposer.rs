// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for the incremental decomposer and the reader entry point
//!
//! Arbitrary bytes fed to `decompose_reader` always decompose: lines that
//! are not UTF-8 become unparsed records and coverage still holds.

#![no_main]

use libfuzzer_sys::fuzz_target;

use lintsight_parse::{Decomposer, decompose_reader};

fuzz_target!(|data: &[u8]| {
    if let Ok(result) = decompose_reader(data) {
        assert!(result.is_covered());
    }

    if let Ok(input) = std::str::from_utf8(data) {
        let mut decomposer = Decomposer::new();
        for line in input.split('\n') {
            let _ = decomposer.push_line(line);
        }
        let _ = decomposer.finish();
    }
});
