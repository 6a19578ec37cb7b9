//! Sequence diagram layout.
//!
//! # Overview
//!
//! Layout is a single pass down the page. A vertical cursor, the *tide
//! mark*, starts at the top of the diagram and only ever moves down; every
//! primitive is positioned relative to it. Alongside the primitives, the
//! pass keeps two kinds of bookkeeping:
//!
//! - one [`activity::BoxTracker`] per lifeline, recording when the lifeline
//!   is active, and
//! - a [`nogo::NoGoZones`] registry of the vertical space each interaction
//!   occupies between its two lifelines.
//!
//! Once all statements are processed, the [`finalizer`] draws each lifeline
//! as dashed segments that skip both.
//!
//! The entry point is [`Creator`].

mod activity;
mod creator;
mod finalizer;
mod frame;
mod interactions;
mod nogo;
pub mod sizer;
mod spacing;

pub use creator::Creator;
pub use sizer::{LiteralSizer, Property, ProportionalSizer, Sizer};

use std::fmt;

use thiserror::Error;

/// Errors that abandon the creation of a diagram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown lifeline `{0}`")]
    UnknownLifeline(String),

    #[error("lifeline `{0}` is declared more than once")]
    DuplicateLifeline(String),

    #[error("no activity box is in progress to terminate at y = {y}")]
    TerminateWithoutStart { y: f32 },

    #[error("unknown sizer property `{0}`")]
    UnknownSizerProperty(String),

    #[error("text size must be greater than zero, got {0}")]
    InvalidTextSize(f32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A lifeline's position in declaration order, counted from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LifelineId(usize);

impl LifelineId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LifelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
