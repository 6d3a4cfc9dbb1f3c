// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for whole-log decomposition
//!
//! Every non-blank line must resolve to exactly one record.

#![no_main]

use libfuzzer_sys::fuzz_target;

use lintsight_parse::decompose;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let result = decompose(input);
        assert!(result.is_covered());
    }
});
