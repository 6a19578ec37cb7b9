//! Accumulates diagnostics while a script is checked line by line.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Gathers every diagnostic of a script so the author sees all problems at
/// once rather than only the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns `Err` carrying all diagnostics when any of them is an error.
    /// Otherwise the warnings are logged and `Ok(())` is returned.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            let offset = diagnostic.primary_span().map(|span| span.start());
            warn!(offset:?; "{diagnostic}");
        }
        Ok(())
    }
}
