//! lintsight library
//!
//! This module exports the command-line configuration and the run entry
//! point for use in integration tests and as a library.

pub mod app;
pub mod config;

pub use app::{ERROR_EXIT_CODE, Outcome, run, run_with};
pub use config::{Config, OutputFormat};
