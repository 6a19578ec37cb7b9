//! Geometric primitives for diagram layout.
//!
//! This module provides the small set of geometric types the layout engine
//! works in.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Segment`] - A one-dimensional interval, used for vertical extents
//!
//! # Coordinate System
//!
//! umli uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The unit is an abstract working unit. Diagrams are laid out at a fixed
//! working width and renderers rescale to whatever output size they need.

/// Tolerance used when comparing coordinates for equality.
pub const TOLERANCE: f32 = 0.001;

/// Returns true when `a` and `b` are equal within [`TOLERANCE`].
pub fn val_equal_ish(a: f32, b: f32) -> bool {
    (a - b).abs() < TOLERANCE
}

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use umli_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert!(p.equal_ish(Point::new(10.0004, 19.9996)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub(crate) fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Equality within [`TOLERANCE`] on both axes.
    pub fn equal_ish(self, other: Point) -> bool {
        val_equal_ish(self.x, other.x) && val_equal_ish(self.y, other.y)
    }
}

/// A one-dimensional interval `[start, end]`.
///
/// The layout engine uses segments for vertical extents: the space claimed
/// by an interaction, the life of an activity box, or a visible piece of a
/// lifeline stroke.
///
/// # Examples
///
/// ```
/// # use umli_core::geometry::Segment;
/// let a = Segment::new(10.0, 20.0);
/// let b = Segment::new(15.0, 30.0);
///
/// assert!(a.overlaps(b));
/// assert_eq!(a.merge(b), Segment::new(10.0, 30.0));
/// assert_eq!(a.length(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    start: f32,
    end: f32,
}

impl Segment {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> f32 {
        self.start
    }

    pub fn end(self) -> f32 {
        self.end
    }

    /// Distance from start to end.
    pub fn length(self) -> f32 {
        self.end - self.start
    }

    /// True when the two segments share at least one point.
    pub fn overlaps(self, other: Segment) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The smallest segment covering both.
    pub fn merge(self, other: Segment) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        (-1000.0f32..1000.0, 0.0f32..500.0).prop_map(|(start, len)| Segment::new(start, start + len))
    }

    /// Segment merge should be commutative and cover both inputs.
    fn check_segment_merge(s1: Segment, s2: Segment) -> Result<(), TestCaseError> {
        let merged = s1.merge(s2);
        let reversed = s2.merge(s1);

        prop_assert!(approx_eq!(f32, merged.start(), reversed.start()));
        prop_assert!(approx_eq!(f32, merged.end(), reversed.end()));
        prop_assert!(merged.start() <= s1.start() && merged.start() <= s2.start());
        prop_assert!(merged.end() >= s1.end() && merged.end() >= s2.end());
        Ok(())
    }

    /// Overlap is symmetric.
    fn check_overlap_is_symmetric(s1: Segment, s2: Segment) -> Result<(), TestCaseError> {
        prop_assert_eq!(s1.overlaps(s2), s2.overlaps(s1));
        Ok(())
    }

    proptest! {
        #[test]
        fn segment_merge_covers_both(s1 in segment_strategy(), s2 in segment_strategy()) {
            check_segment_merge(s1, s2)?;
        }

        #[test]
        fn overlap_is_symmetric(s1 in segment_strategy(), s2 in segment_strategy()) {
            check_overlap_is_symmetric(s1, s2)?;
        }
    }
}
