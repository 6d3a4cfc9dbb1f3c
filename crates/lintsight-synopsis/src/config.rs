// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Synopsis configuration
//!
//! [`SynopsisConfig`] is an explicit value passed to every grouping and
//! rendering call. It can only be obtained from [`SynopsisConfig::default`]
//! or a validated [`SynopsisConfigBuilder`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of example lines shown per group
pub const DEFAULT_MAX_EXAMPLES: usize = 3;

/// Default width of example lines when not verbose
pub const DEFAULT_TRUNCATE_WIDTH: usize = 100;

/// Smallest accepted truncation width
pub const MIN_TRUNCATE_WIDTH: usize = 8;

/// Default number of words kept when a message stands in for a rule code
pub const DEFAULT_PREFIX_WORDS: usize = 6;

/// How a diagnostic's group key is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeySelector {
    /// Rule code, falling back to a normalized message prefix
    #[default]
    RuleCode,
    /// Normalized message text
    MessageTemplate,
    /// File path from the location
    File,
    /// Rule code (or message prefix) combined with the file path
    RuleCodeAndFile,
}

impl KeySelector {
    /// Canonical name, accepted by [`FromStr`]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RuleCode => "rule-code",
            Self::MessageTemplate => "message",
            Self::File => "file",
            Self::RuleCodeAndFile => "rule-code-and-file",
        }
    }
}

impl fmt::Display for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeySelector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "rule-code" | "code" => Ok(Self::RuleCode),
            "message" | "message-template" => Ok(Self::MessageTemplate),
            "file" | "path" => Ok(Self::File),
            "rule-code-and-file" | "code-and-file" => Ok(Self::RuleCodeAndFile),
            _ => Err(ConfigError::UnknownKeySelector(s.to_string())),
        }
    }
}

/// Validated configuration for grouping and rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynopsisConfig {
    classification_key_selector: KeySelector,
    rank_by_count: bool,
    max_examples_per_group: usize,
    member_cap: Option<usize>,
    include_unparsed_section: bool,
    include_insights: bool,
    verbose: bool,
    truncate_width: usize,
    message_prefix_words: usize,
}

impl Default for SynopsisConfig {
    /// Rule-code keys, ranked by count, 3 examples per group, every member
    /// kept, unparsed and insight sections on, lines truncated to 100 chars
    fn default() -> Self {
        Self {
            classification_key_selector: KeySelector::RuleCode,
            rank_by_count: true,
            max_examples_per_group: DEFAULT_MAX_EXAMPLES,
            member_cap: None,
            include_unparsed_section: true,
            include_insights: true,
            verbose: false,
            truncate_width: DEFAULT_TRUNCATE_WIDTH,
            message_prefix_words: DEFAULT_PREFIX_WORDS,
        }
    }
}

impl SynopsisConfig {
    /// Start from the defaults
    #[must_use]
    pub fn builder() -> SynopsisConfigBuilder {
        SynopsisConfigBuilder::default()
    }

    /// How group keys are derived
    #[must_use]
    pub fn classification_key_selector(&self) -> KeySelector {
        self.classification_key_selector
    }

    /// Whether groups are ordered by descending count
    #[must_use]
    pub fn rank_by_count(&self) -> bool {
        self.rank_by_count
    }

    /// Example lines shown per group
    #[must_use]
    pub fn max_examples_per_group(&self) -> usize {
        self.max_examples_per_group
    }

    /// Members stored per group; `None` keeps all of them
    #[must_use]
    pub fn member_cap(&self) -> Option<usize> {
        self.member_cap
    }

    /// Whether the trailing unparsed block is rendered
    #[must_use]
    pub fn include_unparsed_section(&self) -> bool {
        self.include_unparsed_section
    }

    /// Whether pylint insights are rendered
    #[must_use]
    pub fn include_insights(&self) -> bool {
        self.include_insights
    }

    /// Whether full raw lines are shown instead of truncated ones
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Maximum characters per example line when not verbose
    #[must_use]
    pub fn truncate_width(&self) -> usize {
        self.truncate_width
    }

    /// Words kept from a message used as a key
    #[must_use]
    pub fn message_prefix_words(&self) -> usize {
        self.message_prefix_words
    }
}

/// Builder for [`SynopsisConfig`]
///
/// Counts are taken as signed integers so that values coming straight from
/// user input are validated here instead of being wrapped or clamped.
#[derive(Debug, Clone)]
pub struct SynopsisConfigBuilder {
    classification_key_selector: KeySelector,
    rank_by_count: bool,
    max_examples_per_group: i64,
    member_cap: Option<i64>,
    include_unparsed_section: bool,
    include_insights: bool,
    verbose: bool,
    truncate_width: usize,
    message_prefix_words: usize,
}

impl Default for SynopsisConfigBuilder {
    fn default() -> Self {
        let defaults = SynopsisConfig::default();
        Self {
            classification_key_selector: defaults.classification_key_selector,
            rank_by_count: defaults.rank_by_count,
            max_examples_per_group: DEFAULT_MAX_EXAMPLES as i64,
            member_cap: None,
            include_unparsed_section: defaults.include_unparsed_section,
            include_insights: defaults.include_insights,
            verbose: defaults.verbose,
            truncate_width: defaults.truncate_width,
            message_prefix_words: defaults.message_prefix_words,
        }
    }
}

impl SynopsisConfigBuilder {
    /// Set the key selector
    #[must_use]
    pub fn classification_key_selector(mut self, selector: KeySelector) -> Self {
        self.classification_key_selector = selector;
        self
    }

    /// Order groups by descending count
    #[must_use]
    pub fn rank_by_count(mut self, rank: bool) -> Self {
        self.rank_by_count = rank;
        self
    }

    /// Example lines shown per group
    #[must_use]
    pub fn max_examples_per_group(mut self, n: i64) -> Self {
        self.max_examples_per_group = n;
        self
    }

    /// Members stored per group; `None` keeps all of them
    #[must_use]
    pub fn member_cap(mut self, cap: Option<i64>) -> Self {
        self.member_cap = cap;
        self
    }

    /// Render the trailing unparsed block
    #[must_use]
    pub fn include_unparsed_section(mut self, include: bool) -> Self {
        self.include_unparsed_section = include;
        self
    }

    /// Render pylint insights
    #[must_use]
    pub fn include_insights(mut self, include: bool) -> Self {
        self.include_insights = include;
        self
    }

    /// Show full raw lines
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Maximum characters per example line when not verbose
    #[must_use]
    pub fn truncate_width(mut self, width: usize) -> Self {
        self.truncate_width = width;
        self
    }

    /// Words kept from a message used as a key
    #[must_use]
    pub fn message_prefix_words(mut self, words: usize) -> Self {
        self.message_prefix_words = words;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid value.
    pub fn build(self) -> Result<SynopsisConfig, ConfigError> {
        let max_examples_per_group = usize::try_from(self.max_examples_per_group)
            .map_err(|_| ConfigError::NegativeMaxExamples(self.max_examples_per_group))?;

        let member_cap = match self.member_cap {
            None => None,
            Some(cap) if cap < 1 => return Err(ConfigError::InvalidMemberCap(cap)),
            Some(cap) => Some(usize::try_from(cap).map_err(|_| ConfigError::InvalidMemberCap(cap))?),
        };

        if let Some(cap) = member_cap {
            if cap < max_examples_per_group {
                return Err(ConfigError::MemberCapBelowExamples {
                    member_cap: cap,
                    max_examples: max_examples_per_group,
                });
            }
        }

        if self.truncate_width < MIN_TRUNCATE_WIDTH {
            return Err(ConfigError::TruncateWidthTooSmall {
                width: self.truncate_width,
                minimum: MIN_TRUNCATE_WIDTH,
            });
        }

        if self.message_prefix_words == 0 {
            return Err(ConfigError::ZeroPrefixWords);
        }

        Ok(SynopsisConfig {
            classification_key_selector: self.classification_key_selector,
            rank_by_count: self.rank_by_count,
            max_examples_per_group,
            member_cap,
            include_unparsed_section: self.include_unparsed_section,
            include_insights: self.include_insights,
            verbose: self.verbose,
            truncate_width: self.truncate_width,
            message_prefix_words: self.message_prefix_words,
        })
    }
}
