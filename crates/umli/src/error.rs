//! Error types for umli operations.
//!
//! This module provides the main error type [`UmliError`] which wraps the
//! failures of every stage: reading input, parsing, layout, configuration
//! and export.

use std::io;

use thiserror::Error;

use umli_parser::error::ParseError;

use crate::layout;

/// The main error type for umli operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text alongside the diagnostics, so
/// that callers can render them with source snippets.
#[derive(Debug, Error)]
pub enum UmliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] layout::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for UmliError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl UmliError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
