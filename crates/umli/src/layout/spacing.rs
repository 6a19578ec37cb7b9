//! Horizontal placement of lifelines.
//!
//! All lifeline title boxes have the same width and are spread evenly
//! across the diagram, with one equal gutter between neighbouring boxes and
//! at either edge. Every other horizontal coordinate (activity boxes,
//! interaction line ends, self loops) follows from a lifeline's centre line.

use indexmap::IndexSet;
use log::debug;

use super::{
    Error, LifelineId, Result,
    sizer::{Property, Sizer},
};

/// Horizontal geometry for an ordered set of lifelines.
#[derive(Debug, Clone)]
pub struct Spacing {
    lifelines: IndexSet<String>,
    title_box_width: f32,
    gutter: f32,
    activity_box_width: f32,
    self_loop_width_factor: f32,
}

impl Spacing {
    /// Compute the driving values for `lifelines`, named in declaration order.
    ///
    /// The title box width starts at its ideal value and the gutter takes up
    /// the remaining space. When that leaves less than one font height per
    /// gutter, the gutter is held at one font height and the boxes narrow
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLifeline`] when a name appears twice.
    pub fn new<S: AsRef<str>>(
        sizer: &dyn Sizer,
        width: f32,
        font_height: f32,
        names: &[S],
    ) -> Result<Self> {
        let mut lifelines = IndexSet::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !lifelines.insert(name.to_string()) {
                return Err(Error::DuplicateLifeline(name.to_string()));
            }
        }
        let n = lifelines.len() as f32;

        let mut title_box_width = sizer.get(Property::IdealLifelineTitleBoxWidth)?;
        let mut gutter = (width - n * title_box_width) / (n + 1.0);
        if gutter < font_height {
            gutter = font_height;
            title_box_width = (width - (n + 1.0) * gutter) / n;
        }
        debug!(title_box_width, gutter, lifelines = lifelines.len(); "Lifeline spacing");

        Ok(Self {
            lifelines,
            title_box_width,
            gutter,
            activity_box_width: sizer.get(Property::ActivityBoxWidth)?,
            self_loop_width_factor: sizer.get(Property::SelfLoopWidthFactor)?,
        })
    }

    pub fn title_box_width(&self) -> f32 {
        self.title_box_width
    }

    pub fn gutter(&self) -> f32 {
        self.gutter
    }

    /// Distance between neighbouring centre lines.
    pub fn pitch(&self) -> f32 {
        self.title_box_width + self.gutter
    }

    pub fn ids(&self) -> impl Iterator<Item = LifelineId> + '_ {
        (0..self.lifelines.len()).map(LifelineId::new)
    }

    /// The id of the lifeline called `name`.
    pub fn id_of(&self, name: &str) -> Result<LifelineId> {
        self.lifelines
            .get_index_of(name)
            .map(LifelineId::new)
            .ok_or_else(|| Error::UnknownLifeline(name.to_string()))
    }

    fn check(&self, id: LifelineId) -> Result<usize> {
        if id.index() < self.lifelines.len() {
            Ok(id.index())
        } else {
            Err(Error::UnknownLifeline(id.to_string()))
        }
    }

    /// X coordinate of the lifeline's centre line.
    pub fn centre_line(&self, id: LifelineId) -> Result<f32> {
        let i = self.check(id)? as f32;
        Ok(self.gutter * (i + 1.0) + self.title_box_width * (i + 0.5))
    }

    /// Left and right X of the lifeline's activity boxes.
    pub fn activity_box_x(&self, id: LifelineId) -> Result<(f32, f32)> {
        let centre = self.centre_line(id)?;
        let half = 0.5 * self.activity_box_width;
        Ok((centre - half, centre + half))
    }

    /// Start and end X of an interaction line from `from` to `to`.
    ///
    /// The line runs between the facing edges of the two lifelines'
    /// activity boxes.
    pub fn interaction_line_end_points(
        &self,
        from: LifelineId,
        to: LifelineId,
    ) -> Result<(f32, f32)> {
        let (from_left, from_right) = self.activity_box_x(from)?;
        let (to_left, to_right) = self.activity_box_x(to)?;
        if from < to {
            Ok((from_right, to_left))
        } else {
            Ok((from_left, to_right))
        }
    }

    /// Anchor X for the label of an interaction line: the midpoint of the
    /// two centre lines. Labels are centred on it whichever way the line
    /// points.
    pub fn interaction_label_x(&self, from: LifelineId, to: LifelineId) -> Result<f32> {
        let from_x = self.centre_line(from)?;
        let to_x = self.centre_line(to)?;
        Ok(0.5 * (from_x + to_x))
    }

    /// Left and right X of a self loop, which sits to the right of the
    /// lifeline's activity box.
    pub fn self_loop_x(&self, id: LifelineId) -> Result<(f32, f32)> {
        let (_, left) = self.activity_box_x(id)?;
        Ok((left, left + self.self_loop_width_factor * self.pitch()))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::sizer::ProportionalSizer;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| char::from(b'A' + i as u8).to_string()).collect()
    }

    /// Centre lines increase strictly from left to right.
    fn check_centre_lines_increase(n: usize, text_size: f32) -> Result<(), TestCaseError> {
        let width = 2000.0;
        let sizer = ProportionalSizer::new(width, width * text_size / 1000.0);
        let spacing = Spacing::new(&sizer, width, width * text_size / 1000.0, &names(n))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let centres: Vec<f32> = spacing
            .ids()
            .map(|id| spacing.centre_line(id))
            .collect::<Result<_>>()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        for pair in centres.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        Ok(())
    }

    /// Lifelines are placed symmetrically about the middle of the diagram.
    fn check_centre_lines_are_symmetric(n: usize) -> Result<(), TestCaseError> {
        let width = 2000.0;
        let sizer = ProportionalSizer::new(width, 20.0);
        let spacing = Spacing::new(&sizer, width, 20.0, &names(n))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for i in 0..n {
            let left = spacing.centre_line(LifelineId::new(i)).unwrap_or_default();
            let right = spacing.centre_line(LifelineId::new(n - 1 - i)).unwrap_or_default();
            prop_assert!((left + right - width).abs() < 0.01, "{left} + {right}");
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn centre_lines_increase(n in 1usize..26, text_size in 5.0f32..20.0) {
            check_centre_lines_increase(n, text_size)?;
        }

        #[test]
        fn centre_lines_are_symmetric(n in 1usize..26) {
            check_centre_lines_are_symmetric(n)?;
        }
    }
}
