// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! lintsight-synopsis: Diagnostic grouping and synopsis rendering for lintsight
//!
//! This library crate groups the diagnostics produced by `lintsight-parse`
//! by a configurable key, ranks the groups and renders a compact report that
//! shows each distinct kind of problem once.
//!
//! # Example
//!
//! ```
//! use lintsight_synopsis::{Synopsis, SynopsisConfig};
//!
//! let log = "\
//! a.py:1:0: E0401: Unable to import 'numpy' (import-error)
//! b.py:1:0: E0401: Unable to import 'pandas' (import-error)
//! b.py:1:0: C0114: Missing module docstring (missing-module-docstring)
//! ";
//!
//! let config = SynopsisConfig::builder()
//!     .max_examples_per_group(1)
//!     .build()
//!     .expect("valid config");
//! let synopsis = Synopsis::analyze(log, &config);
//! let report = synopsis.render();
//! assert!(report.contains("---------- E0401 (2) ----------"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod group;
pub mod insight;
pub mod render;
pub mod synopsis;

pub use config::{KeySelector, SynopsisConfig, SynopsisConfigBuilder};
pub use error::ConfigError;
pub use group::{Group, GroupOptions, Grouping, UNCLASSIFIED_KEY, group_diagnostics};
pub use insight::{InsightKind, Insights, collect_insights};
pub use render::{SynopsisRenderer, render, render_with_log};
pub use synopsis::{Synopsis, SynopsisReport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{KeySelector, SynopsisConfig};
    pub use crate::error::ConfigError;
    pub use crate::group::{Grouping, group_diagnostics};
    pub use crate::render::render;
    pub use crate::synopsis::Synopsis;
}
