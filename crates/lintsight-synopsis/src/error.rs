// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Error types for lintsight-synopsis

use thiserror::Error;

/// Errors raised while building a [`SynopsisConfig`](crate::SynopsisConfig)
///
/// Values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_examples_per_group` below zero
    #[error("max_examples_per_group must not be negative, got {0}")]
    NegativeMaxExamples(i64),

    /// `member_cap` of zero or below
    #[error("member_cap must be at least 1, got {0}")]
    InvalidMemberCap(i64),

    /// The member cap would hide examples the renderer is asked to show
    #[error("member_cap ({member_cap}) is smaller than max_examples_per_group ({max_examples})")]
    MemberCapBelowExamples {
        /// Configured member cap
        member_cap: usize,
        /// Configured example count
        max_examples: usize,
    },

    /// Truncation width too small to hold the ellipsis and some text
    #[error("truncate_width must be at least {minimum}, got {width}")]
    TruncateWidthTooSmall {
        /// Configured width
        width: usize,
        /// Smallest accepted width
        minimum: usize,
    },

    /// A message prefix of zero words would collapse every message
    #[error("message_prefix_words must be at least 1")]
    ZeroPrefixWords,

    /// Unrecognized classification key selector name
    #[error("Unknown classification key selector: {0} (expected rule-code, message, file or rule-code-and-file)")]
    UnknownKeySelector(String),
}
