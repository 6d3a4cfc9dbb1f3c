// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line parsing
//!
//! `parse_line` must never panic, and both outcomes keep the raw line.

#![no_main]

use libfuzzer_sys::fuzz_target;

use lintsight_parse::{ParsedLine, parse_line};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse_line(input) {
            ParsedLine::Diagnostic(diag) => assert_eq!(diag.raw_line, input),
            ParsedLine::Unparsed(unparsed) => assert_eq!(unparsed.raw_line, input),
        }
    }
});
