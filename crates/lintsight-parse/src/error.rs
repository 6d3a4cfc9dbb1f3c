// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Error types for lintsight-parse

use thiserror::Error;

/// Errors that can occur while reading a linter log
///
/// Parsing itself never fails: unrecognized or undecodable lines become
/// [`UnparsedLine`](crate::UnparsedLine) records.
#[derive(Debug, Error)]
pub enum LintsightError {
    /// Error reading the log
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
