//! Command-line configuration for lintsight
//!
//! Flags map onto [`SynopsisConfig`]; values that are not given fall back
//! to the library defaults. Validation happens in
//! [`Config::synopsis_config`], not during argument parsing, so a negative
//! `--max-examples` reaches the same check as any other caller.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lintsight_synopsis::{ConfigError, KeySelector, SynopsisConfig};

/// Summarize a linter log into a ranked, deduplicated synopsis
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lintsight")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Linter log to read
    ///
    /// Reads standard input when omitted or `-`.
    #[arg(value_name = "LOG_FILE")]
    pub input: Option<PathBuf>,

    /// How diagnostics are grouped
    #[arg(short, long, env = "LINTSIGHT_KEY", value_name = "SELECTOR")]
    pub key: Option<KeySelector>,

    /// Keep groups in first-seen order instead of ranking by count
    #[arg(long, default_value = "false")]
    pub no_rank: bool,

    /// Example lines shown per group
    #[arg(
        short = 'n',
        long,
        env = "LINTSIGHT_MAX_EXAMPLES",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub max_examples: Option<i64>,

    /// Members stored per group (counts stay exact)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub member_cap: Option<i64>,

    /// Omit the trailing block of unparsed lines
    #[arg(long, default_value = "false")]
    pub no_unparsed: bool,

    /// Omit the missing package and missing docstring sections
    #[arg(long, default_value = "false")]
    pub no_insights: bool,

    /// Show example lines in full, with the reason each unparsed line was rejected
    #[arg(long, default_value = "false")]
    pub full_lines: bool,

    /// Maximum characters per example line
    #[arg(long, value_name = "N")]
    pub truncate_width: Option<usize>,

    /// Append the raw log after the synopsis
    #[arg(long, default_value = "false")]
    pub with_log: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Exit with status 1 when the log contains any diagnostic
    #[arg(long, default_value = "false")]
    pub fail_on_diagnostics: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs go to stderr and never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text synopsis
    #[default]
    Text,
    /// JSON document with groups, insights and unparsed lines
    Json,
}

impl Config {
    /// The log file to read, or `None` for standard input
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Build the validated synopsis configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a count or width is out of range.
    pub fn synopsis_config(&self) -> Result<SynopsisConfig, ConfigError> {
        let mut builder = SynopsisConfig::builder()
            .rank_by_count(!self.no_rank)
            .member_cap(self.member_cap)
            .include_unparsed_section(!self.no_unparsed)
            .include_insights(!self.no_insights)
            .verbose(self.full_lines);

        if let Some(key) = self.key {
            builder = builder.classification_key_selector(key);
        }
        if let Some(n) = self.max_examples {
            builder = builder.max_examples_per_group(n);
        }
        if let Some(width) = self.truncate_width {
            builder = builder.truncate_width(width);
        }

        builder.build()
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.input.is_none());
        assert!(config.key.is_none());
        assert!(config.max_examples.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_default_synopsis_config() {
        let config = Config::default();
        assert_eq!(
            config.synopsis_config().expect("defaults are valid"),
            SynopsisConfig::default()
        );
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = Config {
            input: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert_eq!(config.input_path(), None);

        let config = Config {
            input: Some(PathBuf::from("pylint.log")),
            ..Default::default()
        };
        assert_eq!(config.input_path(), Some(Path::new("pylint.log")));
    }

    #[test]
    fn test_flags_flow_into_synopsis_config() {
        let config = Config {
            key: Some(KeySelector::File),
            no_rank: true,
            max_examples: Some(1),
            member_cap: Some(4),
            no_unparsed: true,
            no_insights: true,
            full_lines: true,
            truncate_width: Some(40),
            ..Default::default()
        };
        let synopsis = config.synopsis_config().expect("valid config");
        assert_eq!(synopsis.classification_key_selector(), KeySelector::File);
        assert!(!synopsis.rank_by_count());
        assert_eq!(synopsis.max_examples_per_group(), 1);
        assert_eq!(synopsis.member_cap(), Some(4));
        assert!(!synopsis.include_unparsed_section());
        assert!(!synopsis.include_insights());
        assert!(synopsis.verbose());
        assert_eq!(synopsis.truncate_width(), 40);
    }

    #[test]
    fn test_negative_max_examples_fails_validation() {
        let config = Config {
            max_examples: Some(-2),
            ..Default::default()
        };
        assert_eq!(
            config.synopsis_config(),
            Err(ConfigError::NegativeMaxExamples(-2))
        );
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(Config::default().log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose_wins_over_quiet() {
        let config = Config {
            verbose: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
