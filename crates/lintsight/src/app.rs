// Copyright (c) 2026 - present lintsight contributors
// SPDX-License-Identifier: MIT

//! Running one synopsis from the command line
//!
//! The input is read fully, decomposed, summarized and written to the
//! output in the requested format. Logs go through `tracing` and never reach
//! the report sink.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use anyhow::{Context, Result};
use lintsight_parse::decompose_reader;
use lintsight_synopsis::{Synopsis, SynopsisConfig, SynopsisReport, render_with_log};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, OutputFormat};

/// What the run found, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Report written, nothing to fail on
    Clean,
    /// Report written and `--fail-on-diagnostics` found diagnostics
    DiagnosticsFound,
}

impl Outcome {
    /// Exit status for this outcome
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::DiagnosticsFound => 1,
        }
    }
}

/// Exit status used when the run fails before a report is written
pub const ERROR_EXIT_CODE: i32 = 2;

#[derive(Serialize)]
struct JsonDocument<'a> {
    config: &'a SynopsisConfig,
    #[serde(flatten)]
    report: SynopsisReport<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log: Option<&'a str>,
}

/// Read the configured input and write the report to stdout
///
/// # Errors
///
/// Fails on invalid configuration, unreadable input or a closed output.
pub fn run(config: &Config) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.input_path() {
        Some(path) => {
            info!(path = %path.display(), "Reading linter log");
            let file = File::open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            run_with(config, BufReader::new(file), &mut out)
        }
        None => {
            info!("Reading linter log from stdin");
            run_with(config, io::stdin().lock(), &mut out)
        }
    }
}

/// Summarize `input` into `out`
///
/// # Errors
///
/// Fails on invalid configuration, unreadable input, or when writing the
/// report fails. Lines that are not UTF-8 are reported as unparsed.
pub fn run_with<R: Read, W: Write>(config: &Config, mut input: R, out: &mut W) -> Result<Outcome> {
    let synopsis_config = config
        .synopsis_config()
        .context("Invalid synopsis configuration")?;
    debug!(config = ?synopsis_config, "Resolved synopsis configuration");

    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("Failed to read linter log")?;

    let decomposition = decompose_reader(bytes.as_slice()).context("Failed to decompose linter log")?;
    let structured = decomposition
        .diagnostics
        .iter()
        .filter(|d| d.shape.is_structured())
        .count();
    info!(
        lines = decomposition.total_lines,
        diagnostics = decomposition.diagnostics.len(),
        message_only = decomposition.diagnostics.len() - structured,
        unparsed = decomposition.unparsed.len(),
        "Decomposed linter log"
    );
    if !decomposition.unparsed.is_empty() {
        warn!(
            count = decomposition.unparsed.len(),
            "Some lines were not recognized as diagnostics"
        );
    }

    let synopsis = Synopsis::from_decomposition(decomposition, &synopsis_config);
    let log = config.with_log.then(|| String::from_utf8_lossy(&bytes));

    match config.format {
        OutputFormat::Text => {
            let report = synopsis.render();
            let text = match log {
                Some(log) => render_with_log(&report, &log),
                None => report,
            };
            out.write_all(text.as_bytes())
                .context("Failed to write synopsis")?;
        }
        OutputFormat::Json => {
            let document = JsonDocument {
                config: synopsis.config(),
                report: synopsis.report(),
                log: log.as_deref(),
            };
            serde_json::to_writer_pretty(&mut *out, &document)
                .context("Failed to write JSON synopsis")?;
            writeln!(out).context("Failed to write JSON synopsis")?;
        }
    }
    out.flush().context("Failed to flush output")?;

    debug!(groups = synopsis.grouping().len(), "Synopsis written");

    if config.fail_on_diagnostics && synopsis.has_diagnostics() {
        Ok(Outcome::DiagnosticsFound)
    } else {
        Ok(Outcome::Clean)
    }
}
