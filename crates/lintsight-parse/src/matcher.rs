// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Named line-matching strategies
//!
//! Each strategy recognizes one structured line shape and reports how many
//! bytes of structured prefix it consumed. The parser runs every strategy in
//! [`MATCHERS`] order and keeps the longest prefix; equal lengths go to the
//! strategy listed first.
//!
//! | Strategy | Example |
//! |----------|---------|
//! | `pylint-colon` | `pkg/mod.py:6:0: E0401: Unable to import 'numpy' (import-error)` |
//! | `path-bracket` | `a.py:10: [C0114(missing-module-docstring), ] Missing module docstring` |
//! | `path-code` | `a.py:3:80: E501 line too long (88 > 79 characters)` |
//! | `path-message` | `a.py:12: unexpected indent` |
//! | `code-prefix` | `E0401: Unable to import 'numpy'` |

use crate::diagnostic::{LineShape, Location};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Path, line and optional column, followed by a colon
const LOCATION: &str = r"(?P<path>(?:[A-Za-z]:)?[^:\s]+):(?P<line>\d+)(?::(?P<col>\d+))?:";

/// Path, line and a mandatory column, followed by a colon
const LOCATION_WITH_COLUMN: &str = r"(?P<path>(?:[A-Za-z]:)?[^:\s]+):(?P<line>\d+):(?P<col>\d+):";

/// Bare rule codes: `C0114`, `E501`, `PLR0913`
const CODE: &str = r"[A-Z]{1,4}[0-9]{1,5}";

static PYLINT_COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{LOCATION_WITH_COLUMN}\s*(?P<code>{CODE}):\s*"))
        .expect("pylint-colon pattern is valid")
});

static PATH_BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{LOCATION}\s*\[(?P<code>[A-Za-z][\w.-]*)(?:\((?P<symbol>[\w-]+)\))?(?:,\s*(?P<obj>[^\]]*))?\]\s*"
    ))
    .expect("path-bracket pattern is valid")
});

static PATH_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{LOCATION}\s*(?P<code>{CODE})\b:?\s*"))
        .expect("path-code pattern is valid")
});

static PATH_MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{LOCATION}\s*")).expect("path-message pattern is valid")
});

static CODE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?P<code>{CODE}):\s*")).expect("code-prefix pattern is valid")
});

/// Trailing pylint symbol such as `(import-error)`
static TRAILING_SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\((?P<symbol>[a-z][a-z0-9]*(?:-[a-z0-9]+)+)\)\s*$")
        .expect("trailing symbol pattern is valid")
});

/// Fields extracted by a successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFields {
    /// Shape of the matcher that produced these fields
    pub shape: LineShape,
    /// Bytes of structured prefix consumed
    pub prefix_len: usize,
    /// Rule code, if the shape carries one
    pub rule_code: Option<String>,
    /// Symbolic rule name
    pub symbol: Option<String>,
    /// File reference
    pub location: Option<Location>,
    /// Remaining text with the trailing symbol removed
    pub message: String,
}

/// Result of probing one strategy against a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The strategy recognized the line
    Matched(MatchedFields),
    /// The strategy does not apply
    NoMatch,
}

impl MatchOutcome {
    /// Prefix length of a match, `None` for `NoMatch`
    #[must_use]
    pub fn prefix_len(&self) -> Option<usize> {
        match self {
            Self::Matched(fields) => Some(fields.prefix_len),
            Self::NoMatch => None,
        }
    }
}

/// A named strategy for recognizing one line shape
pub trait LineMatcher: Sync {
    /// The shape this strategy recognizes
    fn shape(&self) -> LineShape;

    /// Probe the line; must never panic
    fn try_match(&self, line: &str) -> MatchOutcome;

    /// Strategy name, used in traces and tests
    fn name(&self) -> &'static str {
        self.shape().as_str()
    }
}

/// A strategy backed by a single anchored regex with the shared group names
/// `path`, `line`, `col`, `code` and `symbol`
pub struct RegexMatcher {
    shape: LineShape,
    pattern: &'static LazyLock<Regex>,
}

impl RegexMatcher {
    const fn new(shape: LineShape, pattern: &'static LazyLock<Regex>) -> Self {
        Self { shape, pattern }
    }
}

impl LineMatcher for RegexMatcher {
    fn shape(&self) -> LineShape {
        self.shape
    }

    fn try_match(&self, line: &str) -> MatchOutcome {
        let Some(caps) = self.pattern.captures(line) else {
            return MatchOutcome::NoMatch;
        };
        let prefix_len = caps.get(0).map_or(0, |m| m.end());

        let location = match location_from(&caps) {
            Ok(location) => location,
            // A line number that overflows is not a location
            Err(()) => return MatchOutcome::NoMatch,
        };

        let rule_code = caps.name("code").map(|m| m.as_str().to_string());
        let (message, trailing_symbol) = split_trailing_symbol(&line[prefix_len..]);
        let symbol = caps
            .name("symbol")
            .map(|m| m.as_str().to_string())
            .or(trailing_symbol);

        MatchOutcome::Matched(MatchedFields {
            shape: self.shape,
            prefix_len,
            rule_code,
            symbol,
            location,
            message,
        })
    }
}

fn location_from(caps: &Captures<'_>) -> Result<Option<Location>, ()> {
    let (Some(path), Some(line)) = (caps.name("path"), caps.name("line")) else {
        return Ok(None);
    };
    let line: u32 = line.as_str().parse().map_err(|_| ())?;
    let mut location = Location::new(path.as_str(), line);
    if let Some(col) = caps.name("col") {
        location = location.with_column(col.as_str().parse().map_err(|_| ())?);
    }
    Ok(Some(location))
}

/// Split `"Unable to import 'x' (import-error)"` into message and symbol
#[must_use]
pub fn split_trailing_symbol(text: &str) -> (String, Option<String>) {
    let text = text.trim();
    match TRAILING_SYMBOL_RE.captures(text) {
        Some(caps) => {
            let start = caps.get(0).map_or(text.len(), |m| m.start());
            let symbol = caps.name("symbol").map(|m| m.as_str().to_string());
            (text[..start].trim_end().to_string(), symbol)
        }
        None => (text.to_string(), None),
    }
}

static PYLINT_COLON: RegexMatcher = RegexMatcher::new(LineShape::PylintColon, &PYLINT_COLON_RE);
static PATH_BRACKET: RegexMatcher = RegexMatcher::new(LineShape::PathBracket, &PATH_BRACKET_RE);
static PATH_CODE: RegexMatcher = RegexMatcher::new(LineShape::PathCode, &PATH_CODE_RE);
static PATH_MESSAGE: RegexMatcher = RegexMatcher::new(LineShape::PathMessage, &PATH_MESSAGE_RE);
static CODE_PREFIX: RegexMatcher = RegexMatcher::new(LineShape::CodePrefix, &CODE_PREFIX_RE);

/// All structured strategies, most specific first
pub static MATCHERS: &[&dyn LineMatcher] = &[
    &PYLINT_COLON,
    &PATH_BRACKET,
    &PATH_CODE,
    &PATH_MESSAGE,
    &CODE_PREFIX,
];

/// Run every strategy and keep the longest structured prefix
///
/// Ties go to the strategy listed first in [`MATCHERS`].
#[must_use]
pub fn best_match(line: &str) -> Option<MatchedFields> {
    let mut best: Option<MatchedFields> = None;
    for matcher in MATCHERS {
        if let MatchOutcome::Matched(fields) = matcher.try_match(line) {
            let longer = best
                .as_ref()
                .is_none_or(|current| fields.prefix_len > current.prefix_len);
            if longer {
                best = Some(fields);
            }
        }
    }
    best
}
