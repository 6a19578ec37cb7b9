//! Export of laid out diagrams.
//!
//! This module provides the [`Exporter`] trait that turns a
//! [`graphics::Model`] into an output format. It is the final stage in the
//! umli pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Statement Model
//!     ↓ layout
//! Graphics Model
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use umli_core::graphics;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Write `diagram` to `writer` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted, or
    /// [`Error::Io`] if writing the output fails.
    fn export_diagram(&self, diagram: &graphics::Model, writer: &mut dyn io::Write)
    -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
///
/// Converted into [`UmliError::Export`] at the crate boundary.
///
/// [`UmliError::Export`]: crate::UmliError::Export
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
