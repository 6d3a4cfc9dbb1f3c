// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Synopsis rendering
//!
//! Rendering is a pure function of its inputs: the same grouping, unparsed
//! lines and configuration always produce the same text. [`SynopsisRenderer::render_to`]
//! writes into any [`fmt::Write`] sink; delivering the text is up to the caller.
//!
//! ```text
//! ==================== SYNOPSIS ====================
//! diagnostics: 4
//! groups: 2
//! unparsed lines: 1
//!
//! ---------- E0401 (3) ----------
//!     slang/snippers.py:6:0: E0401: Unable to import 'sklearn.decomposition' (import-error)
//!     ... and 2 more
//! ```

use crate::config::SynopsisConfig;
use crate::group::Grouping;
use crate::insight::Insights;
use lintsight_parse::UnparsedLine;
use std::fmt::{self, Write};

const HEADER: &str = "==================== SYNOPSIS ====================";
const LOG_BANNER: &str = "---------------------- LINTER LOG -----------------------";
const EMPTY_NOTICE: &str = "No diagnostics found.";
const ELLIPSIS: &str = "...";

/// Renders grouped diagnostics as a synopsis report
#[derive(Debug, Clone, Copy)]
pub struct SynopsisRenderer<'c> {
    config: &'c SynopsisConfig,
    insights: Option<&'c Insights>,
}

impl<'c> SynopsisRenderer<'c> {
    /// Create a renderer for the given configuration
    #[must_use]
    pub fn new(config: &'c SynopsisConfig) -> Self {
        Self {
            config,
            insights: None,
        }
    }

    /// Render an insight block when the configuration enables it
    #[must_use]
    pub fn with_insights(mut self, insights: &'c Insights) -> Self {
        self.insights = Some(insights);
        self
    }

    /// Render into a string
    #[must_use]
    pub fn render(&self, grouping: &Grouping<'_>, unparsed: &[UnparsedLine]) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.render_to(&mut out, grouping, unparsed);
        out
    }

    /// Render into a caller-supplied sink
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn render_to<W: Write>(
        &self,
        out: &mut W,
        grouping: &Grouping<'_>,
        unparsed: &[UnparsedLine],
    ) -> fmt::Result {
        writeln!(out, "{HEADER}")?;
        writeln!(out, "diagnostics: {}", grouping.total_diagnostics())?;
        writeln!(out, "groups: {}", grouping.len())?;
        writeln!(out, "unparsed lines: {}", unparsed.len())?;

        if grouping.is_empty() {
            writeln!(out)?;
            writeln!(out, "{EMPTY_NOTICE}")?;
        }

        for group in grouping.groups() {
            writeln!(out)?;
            writeln!(out, "{}", section_title(&format!("{} ({})", group.key(), group.count())))?;

            let shown = group.members().len().min(self.config.max_examples_per_group());
            for member in &group.members()[..shown] {
                writeln!(out, "\t{}", self.line_text(&member.raw_line))?;
            }
            let hidden = group.count() - shown;
            if hidden > 0 {
                writeln!(out, "\t... and {hidden} more")?;
            }
        }

        if self.config.include_insights() {
            if let Some(insights) = self.insights {
                for section in insights.sections() {
                    writeln!(out)?;
                    writeln!(out, "{}", section_title(section.kind.as_str()))?;
                    for item in &section.items {
                        writeln!(out, "\t{item}")?;
                    }
                }
            }
        }

        if self.config.include_unparsed_section() && !unparsed.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", section_title(&format!("unparsed ({})", unparsed.len())))?;
            for line in unparsed {
                write!(out, "\t{}: {}", line.line_number, self.line_text(&line.raw_line))?;
                match (&line.reason, self.config.verbose()) {
                    (Some(reason), true) => writeln!(out, " [{reason}]")?,
                    _ => writeln!(out)?,
                }
            }
        }

        Ok(())
    }

    fn line_text<'l>(&self, line: &'l str) -> std::borrow::Cow<'l, str> {
        if self.config.verbose() {
            std::borrow::Cow::Borrowed(line)
        } else {
            truncate(line, self.config.truncate_width())
        }
    }
}

/// Render a grouping with the given configuration and no insight block
#[must_use]
pub fn render(grouping: &Grouping<'_>, unparsed: &[UnparsedLine], config: &SynopsisConfig) -> String {
    SynopsisRenderer::new(config).render(grouping, unparsed)
}

/// Append the full linter log after a rendered report
#[must_use]
pub fn render_with_log(report: &str, log: &str) -> String {
    let mut out = String::with_capacity(report.len() + log.len() + LOG_BANNER.len() + 4);
    out.push_str(report);
    if !report.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(LOG_BANNER);
    out.push_str("\n\n");
    out.push_str(log);
    out
}

fn section_title(title: &str) -> String {
    format!("---------- {title} ----------")
}

/// Cut a line to `width` characters, ending with `...` when shortened
#[must_use]
pub fn truncate(line: &str, width: usize) -> std::borrow::Cow<'_, str> {
    if line.chars().count() <= width {
        return std::borrow::Cow::Borrowed(line);
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut cut: String = line.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    std::borrow::Cow::Owned(cut)
}
