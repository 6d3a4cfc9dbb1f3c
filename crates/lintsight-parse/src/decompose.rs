// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Whole-log decomposition
//!
//! This module splits a complete linter log into lines and resolves every
//! non-blank line to either a [`Diagnostic`] or an [`UnparsedLine`].
//!
//! # Example
//!
//! ```
//! use lintsight_parse::decompose::decompose;
//!
//! let log = "a.py:1:0: C0114: Missing module docstring (missing-module-docstring)\n\
//!            ************* Module b\n";
//! let result = decompose(log);
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.unparsed.len(), 1);
//! assert!(result.is_covered());
//! ```

use crate::diagnostic::{Diagnostic, UnparsedLine};
use crate::error::LintsightError;
use crate::parser::{ParsedLine, RejectReason, parse_numbered_line};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Everything extracted from one log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Parsed diagnostics, in input order
    pub diagnostics: Vec<Diagnostic>,
    /// Rejected lines, in input order
    pub unparsed: Vec<UnparsedLine>,
    /// Every line seen, blank ones included
    pub total_lines: usize,
    /// Blank and whitespace-only lines
    pub blank_lines: usize,
}

impl Decomposition {
    /// Lines that were classified (non-blank)
    #[must_use]
    pub fn considered_lines(&self) -> usize {
        self.total_lines - self.blank_lines
    }

    /// Every considered line resolved to exactly one record
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.diagnostics.len() + self.unparsed.len() == self.considered_lines()
    }

    /// No diagnostics and no unparsed lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.unparsed.is_empty()
    }
}

/// What happened to a line pushed into a [`Decomposer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// Blank or whitespace-only, not classified
    Blank,
    /// Appended to the diagnostics
    Diagnostic,
    /// Appended to the unparsed lines
    Unparsed,
}

/// Incremental decomposer fed one line at a time
#[derive(Debug, Default)]
pub struct Decomposer {
    result: Decomposition,
}

impl Decomposer {
    /// Create an empty decomposer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line; a trailing `\r` is dropped first
    pub fn push_line(&mut self, line: &str) -> LineDisposition {
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.result.total_lines += 1;

        if line.trim().is_empty() {
            self.result.blank_lines += 1;
            return LineDisposition::Blank;
        }

        match parse_numbered_line(self.result.total_lines, line) {
            ParsedLine::Diagnostic(diag) => {
                self.result.diagnostics.push(diag);
                LineDisposition::Diagnostic
            }
            ParsedLine::Unparsed(unparsed) => {
                self.result.unparsed.push(unparsed);
                LineDisposition::Unparsed
            }
        }
    }

    /// Record a line whose bytes are not UTF-8
    ///
    /// The line is kept, lossily decoded, as an unparsed record.
    pub fn push_invalid_line(&mut self, bytes: &[u8]) -> LineDisposition {
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        self.result.total_lines += 1;
        self.result.unparsed.push(UnparsedLine::new(
            self.result.total_lines,
            String::from_utf8_lossy(bytes),
            Some(RejectReason::InvalidUtf8.as_str().to_string()),
        ));
        LineDisposition::Unparsed
    }

    /// Finish and return the decomposition
    #[must_use]
    pub fn finish(self) -> Decomposition {
        self.result
    }
}

/// Decompose a complete log held in memory
///
/// Lines end at `\n`; a final line without one is still read.
#[must_use]
pub fn decompose(log: &str) -> Decomposition {
    let mut decomposer = Decomposer::new();
    for line in log.split_terminator('\n') {
        decomposer.push_line(line);
    }
    decomposer.finish()
}

/// Decompose a log read from a buffered reader
///
/// Lines that are not valid UTF-8 become unparsed records; they never stop
/// the decomposition.
///
/// # Errors
///
/// Returns `LintsightError::Io` if reading fails.
pub fn decompose_reader<R: BufRead>(reader: R) -> Result<Decomposition, LintsightError> {
    let mut decomposer = Decomposer::new();
    for line in reader.split(b'\n') {
        let bytes = line?;
        match std::str::from_utf8(&bytes) {
            Ok(text) => decomposer.push_line(text),
            Err(_) => decomposer.push_invalid_line(&bytes),
        };
    }
    Ok(decomposer.finish())
}
