//! The diagram's outer frame, its optional title and the lifeline title
//! boxes along the top.

use log::trace;

use umli_core::{
    geometry::Point,
    graphics::{HJust, Primitives},
};

use super::{
    LifelineId, Result,
    sizer::{Property, Sizer},
    spacing::Spacing,
};

pub struct FrameMaker<'a> {
    pub sizer: &'a dyn Sizer,
    pub width: f32,
    pub font_height: f32,
    pub primitives: &'a mut Primitives,
}

/// Where the lifeline title boxes ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBoxes {
    /// Bottom edge of the boxes, where the lifelines begin.
    pub bottom: f32,
    /// Tide mark below the boxes and their padding.
    pub tide: f32,
}

impl FrameMaker<'_> {
    /// Draw the diagram title in the frame's top left corner, boxed off on
    /// its right and bottom. Returns the tide mark below it.
    pub fn title<S: AsRef<str>>(&mut self, rows: &[S], tide: f32) -> Result<f32> {
        let frame_left = self.sizer.get(Property::DiagPadL)?;
        let frame_top = self.sizer.get(Property::DiagramPadT)?;

        let rows_top = frame_top + self.sizer.get(Property::FrameTitleTextPadT)?;
        let text_x = frame_left + self.sizer.get(Property::FrameTitleTextPadL)?;
        self.primitives.add_rows_of_text(
            Point::new(text_x, rows_top),
            self.font_height,
            HJust::Left,
            rows,
        );

        let bottom = rows_top
            + rows.len() as f32 * self.font_height
            + self.sizer.get(Property::FrameTitleTextPadB)?;
        let right = frame_left + self.sizer.get(Property::FrameTitleBoxWidth)?;
        self.primitives.add_line(
            Point::new(frame_left, bottom),
            Point::new(right, bottom),
            false,
        );
        self.primitives
            .add_line(Point::new(right, frame_top), Point::new(right, bottom), false);

        let below = bottom + self.sizer.get(Property::FrameTitleRectPadB)?;
        trace!(tide, below; "Frame title");
        Ok(below.max(tide))
    }

    /// Draw one title box per lifeline, all the same height, with the label
    /// rows sitting at the bottom of each box.
    pub fn title_boxes<S: AsRef<str>>(
        &mut self,
        spacing: &Spacing,
        labels: &[Vec<S>],
        tide: f32,
    ) -> Result<TitleBoxes> {
        let pad_t = self.sizer.get(Property::TitleBoxLabelPadT)?;
        let pad_b = self.sizer.get(Property::TitleBoxLabelPadB)?;
        let max_rows = labels.iter().map(Vec::len).max().unwrap_or(0);
        let height = max_rows as f32 * self.font_height + pad_t + pad_b;

        let top = tide;
        let bottom = top + height;
        let half_width = 0.5 * spacing.title_box_width();
        for (index, rows) in labels.iter().enumerate() {
            let centre = spacing.centre_line(LifelineId::new(index))?;
            self.primitives
                .add_rect(centre - half_width, top, centre + half_width, bottom);

            let first_row_y = bottom - rows.len() as f32 * self.font_height - pad_b;
            self.primitives.add_rows_of_text(
                Point::new(centre, first_row_y),
                self.font_height,
                HJust::Centre,
                rows,
            );
        }

        Ok(TitleBoxes {
            bottom,
            tide: bottom + self.sizer.get(Property::TitleBoxPadB)?,
        })
    }

    /// Draw the frame around everything above `tide`, returning its bottom
    /// edge.
    pub fn finalize_frame(&mut self, tide: f32) -> Result<f32> {
        let left = self.sizer.get(Property::DiagPadL)?;
        let top = self.sizer.get(Property::DiagramPadT)?;
        let bottom = tide + self.sizer.get(Property::FrameInternalPadB)?;
        self.primitives
            .add_rect(left, top, self.width - left, bottom);
        Ok(bottom)
    }
}
