// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Actionable findings derived from specific pylint rules
//!
//! - `E0401` (`import-error`): the top-level package that failed to import
//! - `C0114` (`missing-module-docstring`): the file missing a docstring
//!
//! Entries are deduplicated and listed in first-seen order.

use lintsight_parse::Diagnostic;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Unable to import '(?P<module>[\w.]+)'").expect("import pattern is valid")
});

/// Kind of actionable finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A third-party package could not be imported
    MissingPackage,
    /// A module has no docstring
    MissingDocstring,
}

impl InsightKind {
    /// Section name used in reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingPackage => "missing_package",
            Self::MissingDocstring => "missing_docstring",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All values found for one insight kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSection {
    /// The kind of finding
    pub kind: InsightKind,
    /// Distinct values in first-seen order
    pub items: Vec<String>,
}

/// Insight sections in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    sections: Vec<InsightSection>,
    #[serde(skip)]
    seen: HashSet<(InsightKind, String)>,
}

impl Insights {
    /// Sections in first-seen order
    #[must_use]
    pub fn sections(&self) -> &[InsightSection] {
        &self.sections
    }

    /// Items of one kind, empty if none were found
    #[must_use]
    pub fn items(&self, kind: InsightKind) -> &[String] {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    /// True when no insight was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn record(&mut self, kind: InsightKind, item: String) {
        if !self.seen.insert((kind, item.clone())) {
            return;
        }
        match self.sections.iter_mut().find(|s| s.kind == kind) {
            Some(section) => section.items.push(item),
            None => self.sections.push(InsightSection {
                kind,
                items: vec![item],
            }),
        }
    }
}

/// Derive the insight of a single diagnostic, if it has one
#[must_use]
pub fn insight_for(diag: &Diagnostic) -> Option<(InsightKind, String)> {
    let code = diag.code();
    let symbol = diag.symbol.as_deref();

    if code == Some("E0401") || symbol == Some("import-error") {
        let caps = IMPORT_RE.captures(&diag.message)?;
        let module = caps.name("module")?.as_str();
        let package = module.split('.').next().filter(|p| !p.is_empty())?;
        return Some((InsightKind::MissingPackage, package.to_string()));
    }

    if code == Some("C0114") || symbol == Some("missing-module-docstring") {
        return diag
            .path()
            .map(|path| (InsightKind::MissingDocstring, path.to_string()));
    }

    None
}

/// Collect insights across a diagnostic sequence
#[must_use]
pub fn collect_insights(diagnostics: &[Diagnostic]) -> Insights {
    let mut insights = Insights::default();
    for (kind, item) in diagnostics.iter().filter_map(insight_for) {
        insights.record(kind, item);
    }
    insights
}
