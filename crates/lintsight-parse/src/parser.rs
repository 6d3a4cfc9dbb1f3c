// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Single-line diagnostic parsing
//!
//! [`parse_line`] turns one line of linter output into either a
//! [`Diagnostic`] or an [`UnparsedLine`]. Structured shapes are tried first
//! (see [`crate::matcher`]); free text without a code or location becomes a
//! message-only diagnostic. A line is only reported as unparsed when it
//! carries no diagnostic text: stack-trace fragments, section banners,
//! pure decoration and lines with control characters.

use crate::diagnostic::{Diagnostic, LineShape, UnparsedLine};
use crate::matcher::best_match;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BANNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\*{3,}|={3,}|-{3,}|#{3,})\s*\S").expect("banner pattern is valid")
});

static TRACEBACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Traceback \(most recent call last\):?\s*$").expect("traceback pattern is valid")
});

/// Result of parsing one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParsedLine {
    /// The line yielded a diagnostic
    Diagnostic(Diagnostic),
    /// The line was rejected
    Unparsed(UnparsedLine),
}

impl ParsedLine {
    /// The diagnostic, if the line parsed
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(diag) => Some(diag),
            Self::Unparsed(_) => None,
        }
    }

    /// Whether the line was rejected
    #[must_use]
    pub fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed(_))
    }
}

/// Why free text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// `Traceback (most recent call last):`
    StackTrace,
    /// Leading whitespace with no structured prefix
    IndentedContinuation,
    /// `************* Module pkg` and similar headers
    SectionBanner,
    /// No letters or digits at all
    Decoration,
    /// Control characters other than tab
    ControlCharacters,
    /// Bytes that do not decode as UTF-8
    InvalidUtf8,
}

impl RejectReason {
    /// Human-readable explanation stored on the unparsed line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StackTrace => "stack trace header",
            Self::IndentedContinuation => "indented continuation line",
            Self::SectionBanner => "section banner",
            Self::Decoration => "no alphanumeric content",
            Self::ControlCharacters => "control characters in line",
            Self::InvalidUtf8 => "invalid UTF-8",
        }
    }
}

/// Parse a single line, numbered 1 when used standalone
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    parse_numbered_line(1, line)
}

/// Parse a line, recording its 1-based position for unparsed reporting
#[must_use]
pub fn parse_numbered_line(line_number: usize, line: &str) -> ParsedLine {
    let trimmed = line.trim();

    if let Some(fields) = best_match(trimmed) {
        return ParsedLine::Diagnostic(Diagnostic {
            rule_code: fields.rule_code,
            symbol: fields.symbol,
            message: fields.message,
            location: fields.location,
            raw_line: line.to_string(),
            shape: fields.shape,
        });
    }

    match reject_reason(line) {
        Some(reason) => ParsedLine::Unparsed(UnparsedLine::new(
            line_number,
            line,
            Some(reason.as_str().to_string()),
        )),
        None => ParsedLine::Diagnostic(Diagnostic {
            rule_code: None,
            symbol: None,
            message: trimmed.to_string(),
            location: None,
            raw_line: line.to_string(),
            shape: LineShape::MessageOnly,
        }),
    }
}

/// Decide whether unstructured text is a message-only diagnostic or noise
#[must_use]
pub fn reject_reason(line: &str) -> Option<RejectReason> {
    if line.chars().any(|c| c.is_control() && c != '\t') {
        return Some(RejectReason::ControlCharacters);
    }
    let trimmed = line.trim();
    if !trimmed.chars().any(char::is_alphanumeric) {
        return Some(RejectReason::Decoration);
    }
    if TRACEBACK_RE.is_match(trimmed) {
        return Some(RejectReason::StackTrace);
    }
    if line.starts_with(char::is_whitespace) {
        return Some(RejectReason::IndentedContinuation);
    }
    if BANNER_RE.is_match(trimmed) {
        return Some(RejectReason::SectionBanner);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Location;
    use similar_asserts::assert_eq;

    fn expect_diagnostic(line: &str) -> Diagnostic {
        match parse_line(line) {
            ParsedLine::Diagnostic(diag) => diag,
            ParsedLine::Unparsed(u) => panic!("expected diagnostic, got {u:?}"),
        }
    }

    fn expect_unparsed(line: &str) -> UnparsedLine {
        match parse_line(line) {
            ParsedLine::Unparsed(u) => u,
            ParsedLine::Diagnostic(d) => panic!("expected unparsed, got {d:?}"),
        }
    }

    #[test]
    fn test_bracketed_code_with_location() {
        let diag = expect_diagnostic("a.py:10: [C0114] missing docstring");
        assert_eq!(diag.rule_code.as_deref(), Some("C0114"));
        assert_eq!(diag.location, Some(Location::new("a.py", 10)));
        assert_eq!(diag.message, "missing docstring");
        assert_eq!(diag.raw_line, "a.py:10: [C0114] missing docstring");
    }

    #[test]
    fn test_pylint_default_format() {
        let diag = expect_diagnostic(
            "slang/__init__.py:1:0: C0114: Missing module docstring (missing-module-docstring)",
        );
        assert_eq!(diag.shape, LineShape::PylintColon);
        assert_eq!(diag.rule_code.as_deref(), Some("C0114"));
        assert_eq!(diag.symbol.as_deref(), Some("missing-module-docstring"));
        assert_eq!(diag.message, "Missing module docstring");
        assert_eq!(diag.path(), Some("slang/__init__.py"));
    }

    #[test]
    fn test_code_prefixed_line() {
        let diag = expect_diagnostic("E0401: Unable to import 'pandas'");
        assert_eq!(diag.shape, LineShape::CodePrefix);
        assert_eq!(diag.rule_code.as_deref(), Some("E0401"));
        assert_eq!(diag.location, None);
    }

    #[test]
    fn test_free_text_is_message_only() {
        let diag = expect_diagnostic("Your code has been rated at 9.42/10");
        assert_eq!(diag.shape, LineShape::MessageOnly);
        assert_eq!(diag.rule_code, None);
        assert_eq!(diag.message, "Your code has been rated at 9.42/10");
    }

    #[test]
    fn test_location_with_empty_message_is_low_confidence_diagnostic() {
        let diag = expect_diagnostic("a.py:3:");
        assert_eq!(diag.shape, LineShape::PathMessage);
        assert_eq!(diag.message, "");
        assert!(!diag.raw_line.is_empty());
    }

    #[test]
    fn test_indented_structured_line_still_parses() {
        let diag = expect_diagnostic("    a.py:2:4: W0611: Unused import os (unused-import)");
        assert_eq!(diag.rule_code.as_deref(), Some("W0611"));
        assert_eq!(diag.raw_line, "    a.py:2:4: W0611: Unused import os (unused-import)");
    }

    #[test]
    fn test_stack_trace_fragments_are_unparsed() {
        let header = expect_unparsed("Traceback (most recent call last):");
        assert_eq!(header.reason.as_deref(), Some("stack trace header"));

        let frame = expect_unparsed("  File \"/usr/lib/python3/site.py\", line 73, in <module>");
        assert_eq!(frame.reason.as_deref(), Some("indented continuation line"));
    }

    #[test]
    fn test_banner_and_decoration_are_unparsed() {
        let banner = expect_unparsed("************* Module slang.snippers");
        assert_eq!(banner.reason.as_deref(), Some("section banner"));

        let rule = expect_unparsed("-----------------------------------");
        assert_eq!(rule.reason.as_deref(), Some("no alphanumeric content"));
    }

    #[test]
    fn test_control_characters_are_unparsed() {
        let u = expect_unparsed("\u{1b}[31mred\u{1b}[0m");
        assert_eq!(u.reason.as_deref(), Some("control characters in line"));
    }

    #[test]
    fn test_numbered_line_keeps_position() {
        match parse_numbered_line(42, "====") {
            ParsedLine::Unparsed(u) => assert_eq!(u.line_number, 42),
            ParsedLine::Diagnostic(d) => panic!("unexpected diagnostic {d:?}"),
        }
    }

    #[test]
    fn test_parsed_line_helpers() {
        let parsed = parse_line("E0401: Unable to import 'x'");
        assert!(!parsed.is_unparsed());
        assert!(parsed.diagnostic().is_some());
        assert!(parse_line("----").is_unparsed());
    }
}
