// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! End-to-end analysis of one linter log

use crate::config::SynopsisConfig;
use crate::group::{GroupOptions, Grouping, group_diagnostics};
use crate::insight::{Insights, collect_insights};
use crate::render::SynopsisRenderer;
use lintsight_parse::{Decomposition, decompose};
use serde::Serialize;

/// A decomposed log together with the configuration used to summarize it
#[derive(Debug, Clone)]
pub struct Synopsis {
    config: SynopsisConfig,
    decomposition: Decomposition,
    insights: Insights,
}

impl Synopsis {
    /// Decompose the log and derive its insights
    #[must_use]
    pub fn analyze(log: &str, config: &SynopsisConfig) -> Self {
        Self::from_decomposition(decompose(log), config)
    }

    /// Summarize an existing decomposition
    #[must_use]
    pub fn from_decomposition(decomposition: Decomposition, config: &SynopsisConfig) -> Self {
        let insights = collect_insights(&decomposition.diagnostics);
        Self {
            config: config.clone(),
            decomposition,
            insights,
        }
    }

    /// The configuration in effect
    #[must_use]
    pub fn config(&self) -> &SynopsisConfig {
        &self.config
    }

    /// Parsed diagnostics and unparsed lines
    #[must_use]
    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Groups borrowing this synopsis' diagnostics
    #[must_use]
    pub fn grouping(&self) -> Grouping<'_> {
        group_diagnostics(
            &self.decomposition.diagnostics,
            &GroupOptions::from(&self.config),
        )
    }

    /// Pylint insights
    #[must_use]
    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    /// True when the log yielded at least one diagnostic
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.decomposition.diagnostics.is_empty()
    }

    /// Render the text report
    #[must_use]
    pub fn render(&self) -> String {
        SynopsisRenderer::new(&self.config)
            .with_insights(&self.insights)
            .render(&self.grouping(), &self.decomposition.unparsed)
    }

    /// Structured view for programmatic callers
    #[must_use]
    pub fn report(&self) -> SynopsisReport<'_> {
        SynopsisReport {
            total_lines: self.decomposition.total_lines,
            blank_lines: self.decomposition.blank_lines,
            diagnostics: self.decomposition.diagnostics.len(),
            groups: self.grouping(),
            insights: &self.insights,
            unparsed: &self.decomposition.unparsed,
        }
    }
}

/// Serializable summary of a [`Synopsis`]
#[derive(Debug, Serialize)]
pub struct SynopsisReport<'a> {
    /// Every line seen, blank ones included
    pub total_lines: usize,
    /// Blank and whitespace-only lines
    pub blank_lines: usize,
    /// Number of diagnostics
    pub diagnostics: usize,
    /// Groups in emission order
    pub groups: Grouping<'a>,
    /// Pylint insights
    pub insights: &'a Insights,
    /// Rejected lines
    pub unparsed: &'a [lintsight_parse::UnparsedLine],
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_analyze_and_render_are_deterministic() {
        let log = "E0401: Unable to import 'a'\nC0114: x\nE0401: Unable to import 'b'\n";
        let config = SynopsisConfig::default();
        let first = Synopsis::analyze(log, &config).render();
        let second = Synopsis::analyze(log, &config).render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let synopsis = Synopsis::analyze("E0401: a\n----\n", &SynopsisConfig::default());
        assert_eq!(synopsis.render(), synopsis.render());
    }

    #[test]
    fn test_report_counts() {
        let synopsis = Synopsis::analyze(
            "E0401: a\n\nE0401: b\n*** Module x\n",
            &SynopsisConfig::default(),
        );
        let report = synopsis.report();
        assert_eq!(report.total_lines, 4);
        assert_eq!(report.blank_lines, 1);
        assert_eq!(report.diagnostics, 2);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.unparsed.len(), 1);
        assert!(synopsis.has_diagnostics());
    }

    #[test]
    fn test_empty_log() {
        let synopsis = Synopsis::analyze("", &SynopsisConfig::default());
        assert!(!synopsis.has_diagnostics());
        assert!(synopsis.render().contains("No diagnostics found."));
    }
}
