//! umli Core Types and Definitions
//!
//! This crate provides the foundational types shared by the umli parser,
//! layout engine and renderers. It includes:
//!
//! - **Geometry**: Points and vertical segments ([`geometry`] module)
//! - **Graphics**: The primitive-based output model ([`graphics`] module)
//! - **DSL**: The ordered statement model produced by the parser ([`dsl`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod dsl;
pub mod geometry;
pub mod graphics;
