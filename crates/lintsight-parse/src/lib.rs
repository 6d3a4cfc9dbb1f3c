// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! lintsight-parse: Linter log parsing for lintsight
//!
//! This library crate turns free-form static-analysis output (pylint first,
//! flake8/ruff-style lines as well) into structured diagnostics, keeping every
//! line it cannot interpret as an explicit unparsed record.
//!
//! # Example
//!
//! ```
//! use lintsight_parse::{decompose, parse_line};
//!
//! // Parse a single line
//! let parsed = parse_line("a.py:10: [C0114] missing docstring");
//! let diag = parsed.diagnostic().expect("structured line");
//! assert_eq!(diag.code(), Some("C0114"));
//!
//! // Or decompose a whole log
//! let result = decompose("E0401: Unable to import 'numpy'\nTraceback (most recent call last):");
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.unparsed.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod decompose;
pub mod diagnostic;
pub mod error;
pub mod matcher;
pub mod parser;

pub use decompose::{Decomposer, Decomposition, LineDisposition, decompose, decompose_reader};
pub use diagnostic::{Diagnostic, LineShape, Location, UnparsedLine};
pub use error::LintsightError;
pub use matcher::{LineMatcher, MATCHERS, MatchOutcome, MatchedFields};
pub use parser::{ParsedLine, RejectReason, parse_line, parse_numbered_line};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::decompose::{Decomposition, decompose};
    pub use crate::diagnostic::{Diagnostic, Location, UnparsedLine};
    pub use crate::error::LintsightError;
    pub use crate::parser::{ParsedLine, parse_line};
}
