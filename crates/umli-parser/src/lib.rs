//! # umli Parser
//!
//! Parser for the umli sequence diagram language. It turns script text into
//! the ordered statement [`Model`](umli_core::dsl::Model) consumed by the
//! layout engine, or into a [`ParseError`] carrying every diagnostic found.
//!
//! ## Usage
//!
//! ```
//! # use umli_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "
//!         life A Client
//!         life B Server
//!         full AB get_user( | token)
//!         dash BA user
//!     ";
//!
//!     let model = parse(source)?;
//!     assert_eq!(model.statements().len(), 4);
//!     Ok(())
//! }
//! ```

pub mod error;
mod parser;
mod span;

pub use error::ParseError;
pub use span::{Span, Spanned};

use umli_core::dsl::Model;

/// Parse script text into a statement model.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per rejected line when
/// any line is malformed, references an undeclared lifeline or redeclares
/// one. Warnings alone do not fail the parse; they are logged.
pub fn parse(source: &str) -> Result<Model, ParseError> {
    parser::parse_script(source)
}
