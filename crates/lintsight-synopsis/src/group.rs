// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Diagnostic classification and grouping
//!
//! Groups hold references into the caller's diagnostic slice; nothing is
//! copied. Group order is first-seen key order until [`Grouping::rank_by_count`]
//! reorders by descending count, which keeps first-seen order among ties.

use crate::config::{KeySelector, SynopsisConfig};
use lintsight_parse::Diagnostic;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Key used for diagnostics that yield no classification value
pub const UNCLASSIFIED_KEY: &str = "<unclassified>";

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'[^']*'|"[^"]*""#).expect("quoted literal pattern is valid"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Options controlling how diagnostics are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOptions {
    /// How keys are derived
    pub selector: KeySelector,
    /// Words kept when a message stands in for a rule code
    pub message_prefix_words: usize,
    /// Members stored per group; `None` keeps every member
    pub member_cap: Option<usize>,
    /// Order groups by descending count
    pub rank_by_count: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self::from(&SynopsisConfig::default())
    }
}

impl From<&SynopsisConfig> for GroupOptions {
    fn from(config: &SynopsisConfig) -> Self {
        Self {
            selector: config.classification_key_selector(),
            message_prefix_words: config.message_prefix_words(),
            member_cap: config.member_cap(),
            rank_by_count: config.rank_by_count(),
        }
    }
}

/// Diagnostics sharing one classification key
#[derive(Debug, Clone, Serialize)]
pub struct Group<'a> {
    key: String,
    count: usize,
    first_seen: usize,
    members: Vec<&'a Diagnostic>,
}

impl<'a> Group<'a> {
    fn new(key: String, first_seen: usize) -> Self {
        Self {
            key,
            count: 0,
            first_seen,
            members: Vec::new(),
        }
    }

    fn push(&mut self, diag: &'a Diagnostic, cap: Option<usize>) {
        self.count += 1;
        if cap.is_none_or(|cap| self.members.len() < cap) {
            self.members.push(diag);
        }
    }

    /// The classification value
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True number of diagnostics in the group
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the first member in the diagnostic sequence
    #[must_use]
    pub fn first_seen(&self) -> usize {
        self.first_seen
    }

    /// Stored members in first-seen order
    #[must_use]
    pub fn members(&self) -> &[&'a Diagnostic] {
        &self.members
    }

    /// Members counted but not stored because of the member cap
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.count - self.members.len()
    }

    /// Whether this is the sentinel group for empty keys
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.key == UNCLASSIFIED_KEY
    }
}

/// The full set of groups for one diagnostic sequence
///
/// Serializes as the bare array of groups.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Grouping<'a> {
    groups: Vec<Group<'a>>,
    #[serde(skip)]
    total: usize,
    #[serde(skip)]
    ranked: bool,
}

impl<'a> Grouping<'a> {
    /// Groups in emission order
    #[must_use]
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when there are no groups (and so no diagnostics)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of diagnostics across all groups
    #[must_use]
    pub fn total_diagnostics(&self) -> usize {
        self.total
    }

    /// Whether groups are ordered by count
    #[must_use]
    pub fn is_ranked(&self) -> bool {
        self.ranked
    }

    /// Look up a group by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Group<'a>> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Reorder by descending count, ties kept in first-seen order
    #[must_use]
    pub fn rank_by_count(mut self) -> Self {
        // Vec::sort_by is stable
        self.groups.sort_by(|a, b| b.count.cmp(&a.count));
        self.ranked = true;
        self
    }
}

/// Group diagnostics by the configured key
#[must_use]
pub fn group_diagnostics<'a>(diagnostics: &'a [Diagnostic], options: &GroupOptions) -> Grouping<'a> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<'a>> = Vec::new();

    for (position, diag) in diagnostics.iter().enumerate() {
        let key = classification_key(diag, options.selector, options.message_prefix_words);
        let slot = *index.entry(key).or_insert_with_key(|key| {
            groups.push(Group::new(key.clone(), position));
            groups.len() - 1
        });
        groups[slot].push(diag, options.member_cap);
    }

    let grouping = Grouping {
        groups,
        total: diagnostics.len(),
        ranked: false,
    };
    if options.rank_by_count {
        grouping.rank_by_count()
    } else {
        grouping
    }
}

/// Derive the classification key of a diagnostic
///
/// Returns [`UNCLASSIFIED_KEY`] when the selected fields are empty.
#[must_use]
pub fn classification_key(diag: &Diagnostic, selector: KeySelector, prefix_words: usize) -> String {
    let code_or_prefix = || match diag.code() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => message_prefix(&diag.message, prefix_words),
    };

    let key = match selector {
        KeySelector::RuleCode => code_or_prefix(),
        KeySelector::MessageTemplate => message_template(&diag.message),
        KeySelector::File => diag.path().unwrap_or_default().to_string(),
        KeySelector::RuleCodeAndFile => match (code_or_prefix(), diag.path()) {
            (head, Some(path)) if !head.is_empty() => format!("{head} @ {path}"),
            (_, Some(path)) => path.to_string(),
            (head, None) => head,
        },
    };

    if key.is_empty() {
        UNCLASSIFIED_KEY.to_string()
    } else {
        key
    }
}

/// Normalize a message so that repeated diagnostics differing only in
/// literals share a key
///
/// Quoted literals become `'*'`, digit runs become `N` and whitespace is
/// collapsed.
#[must_use]
pub fn message_template(message: &str) -> String {
    let unquoted = QUOTED_RE.replace_all(message, "'*'");
    let undigited = DIGITS_RE.replace_all(&unquoted, "N");
    undigited.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `words` words of the message template
#[must_use]
pub fn message_prefix(message: &str, words: usize) -> String {
    message_template(message)
        .split(' ')
        .filter(|w| !w.is_empty())
        .take(words)
        .collect::<Vec<_>>()
        .join(" ")
}
