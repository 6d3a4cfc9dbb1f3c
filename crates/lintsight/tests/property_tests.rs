// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Property-based tests for the lintsight CLI
//!
//! Any UTF-8 log with a valid configuration produces a report, and JSON
//! output is always well formed.

use lintsight::{Config, Outcome, OutputFormat, run_with};
use proptest::prelude::*;

fn arbitrary_log() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("************* Module pkg".to_string()),
            Just("Traceback (most recent call last):".to_string()),
            "[a-c]\\.py:[1-9]:0: [CEW]0[0-9]{3}: [a-z ']{0,20}".prop_map(|s| s),
            "[^\\r\\n]{0,60}".prop_map(|s| s),
        ],
        0..30,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn text_run_always_reports(log in arbitrary_log(), max_examples in 0i64..4) {
        let config = Config { max_examples: Some(max_examples), ..Default::default() };
        let mut out = Vec::new();
        let outcome = run_with(&config, log.as_bytes(), &mut out);
        prop_assert_eq!(outcome.ok(), Some(Outcome::Clean));
        let text = String::from_utf8(out).expect("utf-8 output");
        prop_assert!(text.starts_with("==================== SYNOPSIS ===================="));
    }

    #[test]
    fn json_run_is_well_formed(log in arbitrary_log(), with_log in any::<bool>()) {
        let config = Config { format: OutputFormat::Json, with_log, ..Default::default() };
        let mut out = Vec::new();
        run_with(&config, log.as_bytes(), &mut out).expect("run succeeds");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        prop_assert!(json["diagnostics"].is_u64());
        prop_assert_eq!(json.get("log").is_some(), with_log);
    }

    #[test]
    fn fail_on_diagnostics_matches_diagnostic_count(log in arbitrary_log()) {
        let config = Config { fail_on_diagnostics: true, format: OutputFormat::Json, ..Default::default() };
        let mut out = Vec::new();
        let outcome = run_with(&config, log.as_bytes(), &mut out).expect("run succeeds");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        let has_diagnostics = json["diagnostics"].as_u64().unwrap_or(0) > 0;
        prop_assert_eq!(outcome == Outcome::DiagnosticsFound, has_diagnostics);
    }
}
