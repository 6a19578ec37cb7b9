//! Diagnostics for umli scripts.
//!
//! # Overview
//!
//! Every problem found in a script is reported as a [`Diagnostic`]: a
//! severity, an [`ErrorCode`], a message, one or more labelled source spans
//! and optional help text. The parser keeps going after a bad line, so all
//! diagnostics of a script are gathered and returned together inside a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use umli_parser::error::{Diagnostic, ErrorCode};
//! # use umli_parser::Span;
//!
//! let diag = Diagnostic::error("lifeline `A` is declared more than once")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(30..31), "duplicate declaration")
//!     .with_secondary_label(Span::new(5..6), "first declared here")
//!     .with_help("give each lifeline its own letter");
//!
//! assert_eq!(diag.labels().len(), 2);
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
