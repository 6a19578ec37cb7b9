//! Configuration types for umli diagram layout and rendering.
//!
//! All types implement [`serde::Deserialize`], so a configuration can be
//! loaded from any serde format; the command line tool reads TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Text size, lifeline letters and explicit sizes for layout.
//! - [`StyleConfig`] - Output width, colors and font for the rendered SVG.
//!
//! # Example
//!
//! ```
//! # use umli::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().default_text_size(), 10.0);
//! assert_eq!(config.style().output_width(), 800.0);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use umli_core::color::Color;

use crate::layout::{self, LiteralSizer};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout settings that apply when a script does not say otherwise.
///
/// A script's `textsize` and `showletters` directives take precedence over
/// `default_text_size` and `show_letters`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Font height per thousand units of diagram width.
    default_text_size: f32,

    /// Whether each lifeline's letter is shown under its title.
    show_letters: bool,

    /// Explicit values for named sizer properties, such as `ArrowLen`.
    sizing: IndexMap<String, f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_text_size: 10.0,
            show_letters: true,
            sizing: IndexMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn new(default_text_size: f32, show_letters: bool) -> Self {
        Self {
            default_text_size,
            show_letters,
            sizing: IndexMap::new(),
        }
    }

    /// Set an explicit value for the sizer property called `name`.
    pub fn with_sizing(mut self, name: impl Into<String>, value: f32) -> Self {
        self.sizing.insert(name.into(), value);
        self
    }

    pub fn default_text_size(&self) -> f32 {
        self.default_text_size
    }

    pub fn show_letters(&self) -> bool {
        self.show_letters
    }

    /// The configured sizes as a sizer.
    ///
    /// # Errors
    ///
    /// Returns [`layout::Error::UnknownSizerProperty`] for a name that is not
    /// a sizer property.
    pub fn sizer_overrides(&self) -> layout::Result<LiteralSizer> {
        LiteralSizer::from_names(
            self.sizing
                .iter()
                .map(|(name, value)| (name.as_str(), *value)),
        )
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Width of the rendered SVG in pixels; the height keeps the aspect ratio.
    output_width: f32,

    /// Color of every line, box, arrow head and label.
    stroke_color: Color,

    /// Fill behind the whole diagram. Transparent when not set.
    background_color: Option<Color>,

    font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            output_width: 800.0,
            stroke_color: Color::default(),
            background_color: None,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn with_output_width(mut self, output_width: f32) -> Self {
        self.output_width = output_width;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn output_width(&self) -> f32 {
        self.output_width
    }

    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}
