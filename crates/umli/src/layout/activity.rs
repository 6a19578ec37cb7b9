//! Activity box bookkeeping for a single lifeline.

use log::trace;

use umli_core::geometry::Segment;

use super::{Error, Result};

/// Reported as the end of an interval that is still open.
pub const OPEN_END: f32 = -1.0;

/// A vertical span during which a lifeline is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityInterval {
    pub start: f32,
    /// `None` until the interval is terminated.
    pub end: Option<f32>,
}

impl ActivityInterval {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// The interval as a segment, with an open end closed at `bottom`.
    pub fn closed_at(&self, bottom: f32) -> Segment {
        Segment::new(self.start, self.end.unwrap_or(bottom))
    }
}

/// Records the activity intervals of one lifeline, in order.
///
/// At most one interval is open at a time, and it is always the last one.
#[derive(Debug, Clone, Default)]
pub struct BoxTracker {
    intervals: Vec<ActivityInterval>,
}

impl BoxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new interval at `y`, unless one is already open.
    pub fn start_at(&mut self, y: f32) {
        if self.in_progress() {
            trace!(y; "Activity box already in progress");
            return;
        }
        self.intervals.push(ActivityInterval { start: y, end: None });
    }

    /// Close the open interval at `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminateWithoutStart`] when no interval is open.
    pub fn terminate_at(&mut self, y: f32) -> Result<()> {
        match self.intervals.last_mut() {
            Some(interval) if interval.is_open() => {
                interval.end = Some(y);
                Ok(())
            }
            _ => Err(Error::TerminateWithoutStart { y }),
        }
    }

    pub fn in_progress(&self) -> bool {
        self.intervals.last().is_some_and(ActivityInterval::is_open)
    }

    /// The most recently started interval, open or not.
    pub fn most_recent(&self) -> Option<&ActivityInterval> {
        self.intervals.last()
    }

    pub fn intervals(&self) -> &[ActivityInterval] {
        &self.intervals
    }

    /// Every interval as `(start, end)`, with [`OPEN_END`] for an open end.
    pub fn as_segments(&self) -> Vec<(f32, f32)> {
        self.intervals
            .iter()
            .map(|interval| (interval.start, interval.end.unwrap_or(OPEN_END)))
            .collect()
    }
}
