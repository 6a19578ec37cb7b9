//! Error codes for the umli diagnostic system.
//!
//! Codes are grouped by the kind of problem:
//! - `E1xx` - A line is malformed on its own
//! - `E2xx` - A line is well formed but conflicts with the rest of the script
//! - `W3xx` - Warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Too few words.
    ///
    /// Every statement needs at least a keyword and one argument.
    E100,

    /// Unrecognized keyword.
    ///
    /// The first word of a line must be one of `life`, `title`, `full`,
    /// `dash`, `self`, `stop`, `textsize` or `showletters`.
    E101,

    /// Invalid lifeline name.
    ///
    /// Lifelines are named by a single upper case letter.
    E102,

    /// Two lifelines required.
    ///
    /// `full` and `dash` take exactly two upper case letters, such as `AB`.
    E103,

    /// Label text missing.
    ///
    /// `life`, `title`, `full`, `dash` and `self` need label text.
    E104,

    /// Invalid number.
    ///
    /// The argument of `textsize` must be a number.
    E105,

    /// Invalid boolean.
    ///
    /// The argument of `showletters` must be `true` or `false`.
    E106,

    /// Unexpected trailing text.
    ///
    /// `stop`, `textsize` and `showletters` take a single argument.
    E107,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Unknown lifeline.
    ///
    /// A lifeline was referenced before a `life` statement declared it.
    E200,

    /// Duplicate lifeline.
    ///
    /// The same letter was declared by two `life` statements.
    E201,

    /// Text size out of range.
    ///
    /// `textsize` accepts values from 5 to 20 inclusive.
    E202,

    /// Interaction with itself.
    ///
    /// `full` and `dash` must name two different lifelines.
    E203,

    // =========================================================================
    // Warnings (W3xx)
    // =========================================================================
    /// Directive repeated.
    ///
    /// Only the first `textsize` or `showletters` directive takes effect.
    W300,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::W300 => "W300",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "too few words",
            ErrorCode::E101 => "unrecognized keyword",
            ErrorCode::E102 => "invalid lifeline name",
            ErrorCode::E103 => "two lifelines required",
            ErrorCode::E104 => "label text missing",
            ErrorCode::E105 => "invalid number",
            ErrorCode::E106 => "invalid boolean",
            ErrorCode::E107 => "unexpected trailing text",
            ErrorCode::E200 => "unknown lifeline",
            ErrorCode::E201 => "duplicate lifeline",
            ErrorCode::E202 => "text size out of range",
            ErrorCode::E203 => "interaction with itself",
            ErrorCode::W300 => "directive repeated",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E203.to_string(), "E203");
        assert_eq!(ErrorCode::W300.to_string(), "W300");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "unrecognized keyword");
        assert_eq!(ErrorCode::E200.description(), "unknown lifeline");
        assert_eq!(ErrorCode::W300.description(), "directive repeated");
    }
}
