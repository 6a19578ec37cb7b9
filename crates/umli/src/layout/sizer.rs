//! Size and padding constants for layout.
//!
//! Every distance the layout engine uses, other than the positions it
//! derives from the tide mark, comes from a [`Sizer`]. The production
//! [`ProportionalSizer`] derives them all from the font height and the
//! diagram width, so that changing the text size scales the whole diagram
//! consistently. [`LiteralSizer`] holds explicit values; tests use it to pin
//! down exact numbers and configuration uses it to override individual
//! properties.
//!
//! # Example
//!
//! ```
//! # use umli::layout::{Property, ProportionalSizer, Sizer};
//! let sizer = ProportionalSizer::new(2000.0, 20.0);
//! assert_eq!(sizer.get(Property::ArrowLen).unwrap(), 30.0);
//! assert_eq!(sizer.get(Property::ArrowWidth).unwrap(), 12.0);
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::debug;

use super::{Error, Result};

/// A named size or padding.
///
/// Names ending in `PadT`, `PadB` and `PadL` are top, bottom and left
/// paddings respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    DiagramPadT,
    DiagramPadB,
    DiagPadL,
    FrameTitleTextPadT,
    FrameTitleTextPadB,
    FrameTitleTextPadL,
    FrameTitleBoxWidth,
    FrameTitleRectPadB,
    FrameInternalPadB,
    IdealLifelineTitleBoxWidth,
    TitleBoxLabelPadT,
    TitleBoxLabelPadB,
    TitleBoxPadB,
    ArrowLen,
    ArrowWidth,
    /// Space below an interaction line or self loop.
    ///
    /// The default is `0.5·ArrowWidth + 0.5·fh`, which includes clearance
    /// for the lower half of the arrow head. An override replaces the whole
    /// value, so it must allow for the arrow head itself.
    InteractionLinePadB,
    InteractionLineTextPadB,
    InteractionLineLabelIndent,
    ActivityBoxWidth,
    ActivityBoxVerticalOverlap,
    FinalizedActivityBoxesPadB,
    IndividualStoppedBoxPadB,
    SelfLoopHeight,
    /// Width of a self loop as a fraction of the lifeline pitch.
    SelfLoopWidthFactor,
    DashLineDashLen,
    DashLineDashGap,
    /// Lifeline segments shorter than this are not drawn.
    MinLifelineSegLength,
}

const PROPERTY_COUNT: usize = 27;

impl Property {
    pub const ALL: [Property; PROPERTY_COUNT] = [
        Property::DiagramPadT,
        Property::DiagramPadB,
        Property::DiagPadL,
        Property::FrameTitleTextPadT,
        Property::FrameTitleTextPadB,
        Property::FrameTitleTextPadL,
        Property::FrameTitleBoxWidth,
        Property::FrameTitleRectPadB,
        Property::FrameInternalPadB,
        Property::IdealLifelineTitleBoxWidth,
        Property::TitleBoxLabelPadT,
        Property::TitleBoxLabelPadB,
        Property::TitleBoxPadB,
        Property::ArrowLen,
        Property::ArrowWidth,
        Property::InteractionLinePadB,
        Property::InteractionLineTextPadB,
        Property::InteractionLineLabelIndent,
        Property::ActivityBoxWidth,
        Property::ActivityBoxVerticalOverlap,
        Property::FinalizedActivityBoxesPadB,
        Property::IndividualStoppedBoxPadB,
        Property::SelfLoopHeight,
        Property::SelfLoopWidthFactor,
        Property::DashLineDashLen,
        Property::DashLineDashGap,
        Property::MinLifelineSegLength,
    ];

    /// The name used for this property in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Property::DiagramPadT => "DiagramPadT",
            Property::DiagramPadB => "DiagramPadB",
            Property::DiagPadL => "DiagPadL",
            Property::FrameTitleTextPadT => "FrameTitleTextPadT",
            Property::FrameTitleTextPadB => "FrameTitleTextPadB",
            Property::FrameTitleTextPadL => "FrameTitleTextPadL",
            Property::FrameTitleBoxWidth => "FrameTitleBoxWidth",
            Property::FrameTitleRectPadB => "FrameTitleRectPadB",
            Property::FrameInternalPadB => "FrameInternalPadB",
            Property::IdealLifelineTitleBoxWidth => "IdealLifelineTitleBoxWidth",
            Property::TitleBoxLabelPadT => "TitleBoxLabelPadT",
            Property::TitleBoxLabelPadB => "TitleBoxLabelPadB",
            Property::TitleBoxPadB => "TitleBoxPadB",
            Property::ArrowLen => "ArrowLen",
            Property::ArrowWidth => "ArrowWidth",
            Property::InteractionLinePadB => "InteractionLinePadB",
            Property::InteractionLineTextPadB => "InteractionLineTextPadB",
            Property::InteractionLineLabelIndent => "InteractionLineLabelIndent",
            Property::ActivityBoxWidth => "ActivityBoxWidth",
            Property::ActivityBoxVerticalOverlap => "ActivityBoxVerticalOverlap",
            Property::FinalizedActivityBoxesPadB => "FinalizedActivityBoxesPadB",
            Property::IndividualStoppedBoxPadB => "IndividualStoppedBoxPadB",
            Property::SelfLoopHeight => "SelfLoopHeight",
            Property::SelfLoopWidthFactor => "SelfLoopWidthFactor",
            Property::DashLineDashLen => "DashLineDashLen",
            Property::DashLineDashGap => "DashLineDashGap",
            Property::MinLifelineSegLength => "MinLifelineSegLength",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Property::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownSizerProperty(s.to_string()))
    }
}

/// Source of every size and padding used by layout.
pub trait Sizer {
    /// The value of `property`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSizerProperty`] when this sizer does not
    /// define `property`.
    fn get(&self, property: Property) -> Result<f32>;
}

/// The production sizer: every property is a fixed proportion of the font
/// height or the diagram width.
#[derive(Debug, Clone)]
pub struct ProportionalSizer {
    values: [f32; PROPERTY_COUNT],
}

impl ProportionalSizer {
    pub fn new(width: f32, font_height: f32) -> Self {
        let fh = font_height;
        let arrow_len = 1.5 * fh;
        let arrow_width = 0.4 * arrow_len;

        let mut values = [0.0; PROPERTY_COUNT];
        for property in Property::ALL {
            values[property.index()] = match property {
                Property::DiagramPadT
                | Property::DiagramPadB
                | Property::DiagPadL
                | Property::FrameTitleTextPadT
                | Property::FrameTitleTextPadB
                | Property::FrameTitleTextPadL
                | Property::FrameInternalPadB
                | Property::TitleBoxLabelPadT
                | Property::TitleBoxLabelPadB
                | Property::ActivityBoxVerticalOverlap
                | Property::FinalizedActivityBoxesPadB
                | Property::IndividualStoppedBoxPadB
                | Property::DashLineDashLen
                | Property::MinLifelineSegLength => 0.5 * fh,
                Property::FrameTitleRectPadB | Property::TitleBoxPadB => fh,
                Property::FrameTitleBoxWidth => 0.25 * width,
                Property::IdealLifelineTitleBoxWidth => 0.15 * width,
                Property::ArrowLen => arrow_len,
                Property::ArrowWidth => arrow_width,
                // Clears the lower half of the arrow head.
                Property::InteractionLinePadB => 0.5 * arrow_width + 0.5 * fh,
                Property::InteractionLineTextPadB => 0.25 * fh,
                Property::InteractionLineLabelIndent => arrow_len + 0.5 * fh,
                Property::ActivityBoxWidth => 1.5 * fh,
                Property::SelfLoopHeight => 3.0 * fh,
                Property::SelfLoopWidthFactor => 0.25,
                Property::DashLineDashGap => 0.3 * fh,
            };
        }

        Self { values }
    }

    /// Replace the values of every property `overrides` defines.
    pub fn with_overrides(mut self, overrides: &LiteralSizer) -> Self {
        for (property, value) in overrides.iter() {
            debug!(property:?, value; "Overriding sizer property");
            self.values[property.index()] = value;
        }
        self
    }
}

impl Sizer for ProportionalSizer {
    fn get(&self, property: Property) -> Result<f32> {
        Ok(self.values[property.index()])
    }
}

/// A sizer holding explicit values for some properties only.
///
/// # Example
///
/// ```
/// # use umli::layout::{LiteralSizer, Property, Sizer};
/// let sizer = LiteralSizer::new().with(Property::ArrowLen, 7.0);
/// assert_eq!(sizer.get(Property::ArrowLen).unwrap(), 7.0);
/// assert!(sizer.get(Property::ArrowWidth).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiteralSizer {
    values: IndexMap<Property, f32>,
}

impl LiteralSizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.values.insert(property, value);
        self
    }

    /// Build from property names, as found in configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSizerProperty`] for the first name that is not
    /// a [`Property`].
    pub fn from_names<'a>(entries: impl IntoIterator<Item = (&'a str, f32)>) -> Result<Self> {
        entries
            .into_iter()
            .map(|(name, value)| Ok((name.parse::<Property>()?, value)))
            .collect::<Result<IndexMap<_, _>>>()
            .map(|values| Self { values })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.values.iter().map(|(property, value)| (*property, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Sizer for LiteralSizer {
    fn get(&self, property: Property) -> Result<f32> {
        self.values
            .get(&property)
            .copied()
            .ok_or_else(|| Error::UnknownSizerProperty(property.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_every_property_name_round_trips() {
        for property in Property::ALL {
            assert_eq!(property.name().parse::<Property>().unwrap(), property);
        }
    }

    #[test]
    fn test_unknown_property_name() {
        let err = "ArrowSize".parse::<Property>().unwrap_err();
        assert_eq!(err, Error::UnknownSizerProperty("ArrowSize".to_string()));
    }

    #[test]
    fn test_proportional_sizer_defines_every_property() {
        let sizer = ProportionalSizer::new(2000.0, 10.0);
        for property in Property::ALL {
            assert!(sizer.get(property).is_ok(), "{property} missing");
        }
    }

    #[test]
    fn test_proportional_values() {
        let sizer = ProportionalSizer::new(2000.0, 10.0);
        let expected = [
            (Property::DiagramPadT, 5.0),
            (Property::IdealLifelineTitleBoxWidth, 300.0),
            (Property::FrameTitleBoxWidth, 500.0),
            (Property::ArrowLen, 15.0),
            (Property::ArrowWidth, 6.0),
            (Property::InteractionLinePadB, 8.0),
            (Property::InteractionLineLabelIndent, 20.0),
            (Property::SelfLoopHeight, 30.0),
            (Property::SelfLoopWidthFactor, 0.25),
            (Property::DashLineDashGap, 3.0),
        ];

        for (property, value) in expected {
            let actual = sizer.get(property).unwrap();
            assert!(approx_eq!(f32, actual, value, epsilon = 1e-4), "{property}: {actual}");
        }
    }

    #[test]
    fn test_overrides_replace_only_named_properties() {
        let overrides = LiteralSizer::new().with(Property::ArrowLen, 99.0);
        let sizer = ProportionalSizer::new(2000.0, 10.0).with_overrides(&overrides);

        assert_eq!(sizer.get(Property::ArrowLen).unwrap(), 99.0);
        assert_eq!(sizer.get(Property::ArrowWidth).unwrap(), 6.0);
    }

    #[test]
    fn test_interaction_line_pad_override_replaces_arrow_clearance() {
        let sizer = ProportionalSizer::new(2000.0, 10.0);
        let clearance = 0.5 * sizer.get(Property::ArrowWidth).unwrap();
        assert!(sizer.get(Property::InteractionLinePadB).unwrap() >= clearance);

        let overrides = LiteralSizer::new().with(Property::InteractionLinePadB, 1.0);
        let sizer = sizer.with_overrides(&overrides);
        assert_eq!(sizer.get(Property::InteractionLinePadB).unwrap(), 1.0);
        assert_eq!(sizer.get(Property::ArrowWidth).unwrap(), 6.0);
    }

    #[test]
    fn test_literal_sizer_missing_property() {
        let sizer = LiteralSizer::new();
        assert_eq!(
            sizer.get(Property::TitleBoxPadB),
            Err(Error::UnknownSizerProperty("TitleBoxPadB".to_string()))
        );
    }

    #[test]
    fn test_literal_sizer_from_names() {
        let sizer =
            LiteralSizer::from_names([("ArrowLen", 12.0), ("TitleBoxPadB", 3.0)]).unwrap();
        assert_eq!(sizer.get(Property::TitleBoxPadB).unwrap(), 3.0);
        assert_eq!(sizer.iter().count(), 2);

        let err = LiteralSizer::from_names([("Nope", 1.0)]).unwrap_err();
        assert_eq!(err, Error::UnknownSizerProperty("Nope".to_string()));
    }
}
