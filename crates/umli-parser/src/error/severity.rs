//! How serious a diagnostic is.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Any [`Severity::Error`] rejects the whole script. Warnings are reported
/// but the script is still turned into a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The line cannot be understood, or contradicts an earlier line.
    Error,

    /// The line is legal but probably not what the author meant, such as a
    /// second `textsize` directive that will never take effect.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}
