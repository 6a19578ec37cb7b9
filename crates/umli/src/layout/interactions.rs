//! Per-statement layout.
//!
//! Each statement keyword maps to a fixed, ordered list of [`Stage`]s. A
//! [`Maker`] runs those stages one after another, each one emitting
//! primitives at the tide mark and usually pushing it further down.

use log::trace;

use umli_core::{
    dsl::{Keyword, Statement},
    geometry::Point,
    graphics::{HJust, Primitives},
};

use super::{
    Error, LifelineId, Result,
    activity::BoxTracker,
    nogo::NoGoZones,
    sizer::{Property, Sizer},
    spacing::Spacing,
};

/// One step of laying out a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Label above an interaction line.
    InteractionLabel,
    /// Activate the calling lifeline, slightly above the tide mark.
    StartFromBox,
    /// Activate the called lifeline at the tide mark.
    StartToBox,
    /// The arrowed line between the two lifelines.
    InteractionLine,
    /// Label beside a self loop.
    SelfLabel,
    /// Three-sided loop back into the lifeline.
    SelfLoop,
    /// Close the lifeline's activity box.
    EndBox,
}

impl Stage {
    /// The stages run for `keyword`, in order.
    pub fn for_keyword(keyword: Keyword) -> &'static [Stage] {
        match keyword {
            Keyword::Full => &[
                Stage::InteractionLabel,
                Stage::StartFromBox,
                Stage::StartToBox,
                Stage::InteractionLine,
            ],
            Keyword::Dash => &[
                Stage::InteractionLabel,
                Stage::StartToBox,
                Stage::InteractionLine,
            ],
            Keyword::SelfCall => &[Stage::SelfLabel, Stage::StartFromBox, Stage::SelfLoop],
            Keyword::Stop => &[Stage::EndBox],
            Keyword::Life | Keyword::Title | Keyword::TextSize | Keyword::ShowLetters => &[],
        }
    }
}

/// A filled arrow head for a horizontal line from `x1` to `x2` at `y`.
///
/// The tip sits at `x2`; the two tails sit back towards `x1`.
pub fn make_arrow(sizer: &dyn Sizer, x1: f32, x2: f32, y: f32) -> Result<Vec<Point>> {
    let len = sizer.get(Property::ArrowLen)?;
    let half_width = 0.5 * sizer.get(Property::ArrowWidth)?;
    let tail_x = if x2 >= x1 { x2 - len } else { x2 + len };
    Ok(vec![
        Point::new(x2, y),
        Point::new(tail_x, y - half_width),
        Point::new(tail_x, y + half_width),
    ])
}

/// The lifelines a statement refers to: its source and, for interactions
/// between two lifelines, its destination.
#[derive(Debug, Clone, Copy)]
struct Ends {
    from: LifelineId,
    to: LifelineId,
}

/// Lays out statements, borrowing the state of a diagram under construction.
pub struct Maker<'a> {
    pub sizer: &'a dyn Sizer,
    pub spacing: &'a Spacing,
    pub font_height: f32,
    pub trackers: &'a mut [BoxTracker],
    pub zones: &'a mut NoGoZones,
    pub primitives: &'a mut Primitives,
}

impl Maker<'_> {
    /// Lay out `statement` starting at `tide`, returning the new tide mark.
    ///
    /// # Errors
    ///
    /// Fails when the statement names a lifeline that was never declared,
    /// stops a lifeline that is not active, or needs a size the sizer
    /// lacks.
    pub fn make(&mut self, statement: &Statement, tide: f32) -> Result<f32> {
        let stages = Stage::for_keyword(statement.keyword);
        if stages.is_empty() {
            return Ok(tide);
        }

        let ends = self.ends(statement)?;
        let mut tide = tide;
        for stage in stages {
            trace!(stage:?, tide; "Running stage");
            tide = match stage {
                Stage::InteractionLabel => self.interaction_label(statement, ends, tide)?,
                Stage::StartFromBox => {
                    let overlap = self.sizer.get(Property::ActivityBoxVerticalOverlap)?;
                    self.tracker(ends.from)?.start_at(tide - overlap);
                    tide
                }
                Stage::StartToBox => {
                    self.tracker(ends.to)?.start_at(tide);
                    tide
                }
                Stage::InteractionLine => {
                    self.interaction_line(ends, statement.keyword == Keyword::Dash, tide)?
                }
                Stage::SelfLabel => self.self_label(statement, ends.from, tide)?,
                Stage::SelfLoop => self.self_loop(ends.from, tide)?,
                Stage::EndBox => self.end_box(ends.from, tide)?,
            };
        }
        Ok(tide)
    }

    fn ends(&self, statement: &Statement) -> Result<Ends> {
        let lookup = |index: usize| -> Result<LifelineId> {
            let name = statement.referenced_lifelines.get(index).ok_or_else(|| {
                Error::UnknownLifeline(format!("<missing from `{}`>", statement.keyword))
            })?;
            self.spacing.id_of(name)
        };

        let from = lookup(0)?;
        let to = if statement.keyword.referenced_lifeline_count() == 2 {
            lookup(1)?
        } else {
            from
        };
        Ok(Ends { from, to })
    }

    fn tracker(&mut self, id: LifelineId) -> Result<&mut BoxTracker> {
        self.trackers
            .get_mut(id.index())
            .ok_or_else(|| Error::UnknownLifeline(id.to_string()))
    }

    /// Height taken by `rows` of text plus the padding under them.
    fn label_height(&self, rows: usize) -> Result<f32> {
        Ok(rows as f32 * self.font_height + self.sizer.get(Property::InteractionLineTextPadB)?)
    }

    fn interaction_label(&mut self, statement: &Statement, ends: Ends, tide: f32) -> Result<f32> {
        let x = self.spacing.interaction_label_x(ends.from, ends.to)?;
        let rows = &statement.label_segments;
        self.primitives
            .add_rows_of_text(Point::new(x, tide), self.font_height, HJust::Centre, rows);

        let bottom = tide + self.label_height(rows.len())?;
        self.zones.register_space_claim(ends.from, ends.to, tide, bottom);
        Ok(bottom)
    }

    fn interaction_line(&mut self, ends: Ends, dashed: bool, tide: f32) -> Result<f32> {
        let (x1, x2) = self.spacing.interaction_line_end_points(ends.from, ends.to)?;
        self.primitives
            .add_line(Point::new(x1, tide), Point::new(x2, tide), dashed);
        self.primitives
            .add_filled_poly(make_arrow(self.sizer, x1, x2, tide)?);

        let bottom = tide + self.sizer.get(Property::InteractionLinePadB)?;
        self.zones.register_space_claim(ends.from, ends.to, tide, bottom);
        Ok(bottom)
    }

    fn self_label(&mut self, statement: &Statement, id: LifelineId, tide: f32) -> Result<f32> {
        let x = self.spacing.centre_line(id)? + self.sizer.get(Property::InteractionLineLabelIndent)?;
        let rows = &statement.label_segments;
        self.primitives
            .add_rows_of_text(Point::new(x, tide), self.font_height, HJust::Left, rows);
        Ok(tide + self.label_height(rows.len())?)
    }

    fn self_loop(&mut self, id: LifelineId, tide: f32) -> Result<f32> {
        let (left, right) = self.spacing.self_loop_x(id)?;
        let top = tide;
        let bottom = top + self.sizer.get(Property::SelfLoopHeight)?;

        self.primitives
            .add_line(Point::new(left, top), Point::new(right, top), false);
        self.primitives
            .add_line(Point::new(right, top), Point::new(right, bottom), false);
        self.primitives
            .add_line(Point::new(right, bottom), Point::new(left, bottom), false);
        self.primitives
            .add_filled_poly(make_arrow(self.sizer, right, left, bottom)?);

        Ok(bottom + self.sizer.get(Property::InteractionLinePadB)?)
    }

    fn end_box(&mut self, id: LifelineId, tide: f32) -> Result<f32> {
        let tracker = self.tracker(id)?;
        tracker.terminate_at(tide)?;
        let top = tracker.most_recent().map_or(tide, |interval| interval.start);

        let (left, right) = self.spacing.activity_box_x(id)?;
        self.primitives.add_rect(left, top, right, tide);
        Ok(tide + self.sizer.get(Property::IndividualStoppedBoxPadB)?)
    }
}
