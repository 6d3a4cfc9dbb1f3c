// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Diagnostic record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file reference extracted from a diagnostic line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path as written in the log
    pub path: String,
    /// 1-based line number
    pub line: u32,
    /// Column, when the linter reports one
    pub column: Option<u32>,
}

impl Location {
    /// Create a location without a column
    #[must_use]
    pub fn new(path: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column: None,
        }
    }

    /// Attach a column
    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

/// The line shape a diagnostic was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineShape {
    /// `path:line:col: CODE: message (symbol)`
    PylintColon,
    /// `path:line: [CODE(symbol), obj] message`
    PathBracket,
    /// `path:line:col: CODE message`
    PathCode,
    /// `path:line: message`
    PathMessage,
    /// `CODE: message`
    CodePrefix,
    /// Free text with no recognizable code or location
    MessageOnly,
}

impl LineShape {
    /// Stable name of the shape
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PylintColon => "pylint-colon",
            Self::PathBracket => "path-bracket",
            Self::PathCode => "path-code",
            Self::PathMessage => "path-message",
            Self::CodePrefix => "code-prefix",
            Self::MessageOnly => "message-only",
        }
    }

    /// Whether the shape carried any structure beyond free text
    #[must_use]
    pub fn is_structured(self) -> bool {
        self != Self::MessageOnly
    }
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding extracted from a line of linter output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule identifier such as `C0114` or `E501`
    pub rule_code: Option<String>,
    /// Symbolic rule name such as `missing-module-docstring`
    pub symbol: Option<String>,
    /// Human-readable description (may be empty)
    pub message: String,
    /// File reference, when the line carried one
    pub location: Option<Location>,
    /// The line exactly as it appeared in the log
    pub raw_line: String,
    /// Which line shape produced this record
    pub shape: LineShape,
}

impl Diagnostic {
    /// Create a message-only diagnostic
    #[must_use]
    pub fn message_only(message: impl Into<String>, raw_line: impl Into<String>) -> Self {
        Self {
            rule_code: None,
            symbol: None,
            message: message.into(),
            location: None,
            raw_line: raw_line.into(),
            shape: LineShape::MessageOnly,
        }
    }

    /// The rule code, if any
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.rule_code.as_deref()
    }

    /// The file path, if any
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.location.as_ref().map(|loc| loc.path.as_str())
    }

    /// True when the parser found no code, no location and no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rule_code.is_none() && self.location.is_none() && self.message.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        if let Some(code) = &self.rule_code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(&self.message)
    }
}

/// A non-blank line that did not yield a diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnparsedLine {
    /// 1-based position of the line in the input
    pub line_number: usize,
    /// The line exactly as it appeared in the log
    pub raw_line: String,
    /// Why the line was rejected
    pub reason: Option<String>,
}

impl UnparsedLine {
    /// Create an unparsed line record
    #[must_use]
    pub fn new(line_number: usize, raw_line: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new("a.py", 10).to_string(), "a.py:10");
        assert_eq!(
            Location::new("pkg/mod.py", 3).with_column(7).to_string(),
            "pkg/mod.py:3:7"
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic {
            rule_code: Some("C0114".to_string()),
            symbol: None,
            message: "Missing module docstring".to_string(),
            location: Some(Location::new("a.py", 1).with_column(0)),
            raw_line: "a.py:1:0: C0114: Missing module docstring".to_string(),
            shape: LineShape::PylintColon,
        };
        assert_eq!(diag.to_string(), "a.py:1:0: [C0114] Missing module docstring");
        assert_eq!(diag.code(), Some("C0114"));
        assert_eq!(diag.path(), Some("a.py"));
    }

    #[test]
    fn test_message_only_is_unstructured() {
        let diag = Diagnostic::message_only("Your code has been rated", "Your code has been rated");
        assert!(!diag.shape.is_structured());
        assert!(diag.code().is_none());
        assert!(!diag.is_empty());
    }

    #[test]
    fn test_shape_serializes_kebab_case() {
        let json = serde_json::to_string(&LineShape::PylintColon).expect("serialize");
        assert_eq!(json, "\"pylint-colon\"");
        assert_eq!(LineShape::CodePrefix.to_string(), "code-prefix");
    }
}
