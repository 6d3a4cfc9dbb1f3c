// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for a full run with arbitrary options and log bytes
//!
//! Every combination must end in a report or an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use lintsight::{Config, OutputFormat, run_with};
use lintsight_synopsis::KeySelector;

#[derive(Debug, Arbitrary)]
struct RunInput {
    key: u8,
    max_examples: Option<i8>,
    member_cap: Option<i8>,
    truncate_width: Option<u8>,
    no_rank: bool,
    full_lines: bool,
    with_log: bool,
    json: bool,
    log: Vec<u8>,
}

fuzz_target!(|input: RunInput| {
    let key = match input.key % 5 {
        0 => None,
        1 => Some(KeySelector::RuleCode),
        2 => Some(KeySelector::MessageTemplate),
        3 => Some(KeySelector::File),
        _ => Some(KeySelector::RuleCodeAndFile),
    };
    let config = Config {
        key,
        max_examples: input.max_examples.map(i64::from),
        member_cap: input.member_cap.map(i64::from),
        truncate_width: input.truncate_width.map(usize::from),
        no_rank: input.no_rank,
        full_lines: input.full_lines,
        with_log: input.with_log,
        format: if input.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        ..Default::default()
    };

    let mut out = Vec::new();
    let _ = run_with(&config, input.log.as_slice(), &mut out);
});
