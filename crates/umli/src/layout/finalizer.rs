//! Lifeline strokes.
//!
//! Runs once every statement has been laid out. Each lifeline is drawn as a
//! dashed vertical line from the bottom of its title box down to the end of
//! the diagram, broken wherever it would cross one of its own activity boxes
//! or the label or line of an interaction passing over it.

use log::{debug, trace};

use umli_core::{
    geometry::{Point, Segment},
    graphics::Primitives,
};

use super::{LifelineId, Result, activity::BoxTracker, nogo::NoGoZones, spacing::Spacing};

/// Merge overlapping `gaps` and return the parts of `[top, bottom]` they
/// leave uncovered, omitting any shorter than `min_len`.
pub fn visible_segments(
    top: f32,
    bottom: f32,
    mut gaps: Vec<Segment>,
    min_len: f32,
) -> Vec<Segment> {
    gaps.sort_by(|a, b| a.start().total_cmp(&b.start()));

    let mut merged: Vec<Segment> = Vec::with_capacity(gaps.len());
    for gap in gaps {
        match merged.last_mut() {
            Some(last) if last.overlaps(gap) => *last = last.merge(gap),
            _ => merged.push(gap),
        }
    }

    let mut visible = Vec::with_capacity(merged.len() + 1);
    let mut cursor = top;
    for gap in merged {
        if gap.start() > cursor {
            visible.push(Segment::new(cursor, gap.start().min(bottom)));
        }
        cursor = cursor.max(gap.end());
        if cursor >= bottom {
            break;
        }
    }
    if cursor < bottom {
        visible.push(Segment::new(cursor, bottom));
    }

    visible.retain(|segment| segment.length() >= min_len);
    visible
}

pub struct Finalizer<'a> {
    pub spacing: &'a Spacing,
    pub trackers: &'a [BoxTracker],
    pub zones: &'a NoGoZones,
}

impl Finalizer<'_> {
    /// Everything lifeline `id` must not be drawn over. Open activity
    /// intervals extend to `bottom`.
    fn gaps(&self, id: LifelineId, bottom: f32) -> Vec<Segment> {
        let activity = self
            .trackers
            .get(id.index())
            .map(BoxTracker::intervals)
            .unwrap_or_default()
            .iter()
            .map(|interval| interval.closed_at(bottom));
        self.zones.affecting(id).chain(activity).collect()
    }

    /// Add the dashed strokes of every lifeline between `top` and `bottom`.
    pub fn finalize(
        &self,
        top: f32,
        bottom: f32,
        min_seg_len: f32,
        primitives: &mut Primitives,
    ) -> Result<()> {
        for id in self.spacing.ids() {
            let x = self.spacing.centre_line(id)?;
            let segments = visible_segments(top, bottom, self.gaps(id, bottom), min_seg_len);
            trace!(lifeline = id.index(), segments = segments.len(); "Lifeline stroke");
            for segment in segments {
                primitives.add_line(
                    Point::new(x, segment.start()),
                    Point::new(x, segment.end()),
                    true,
                );
            }
        }
        debug!(top, bottom; "Lifelines finalized");
        Ok(())
    }
}
