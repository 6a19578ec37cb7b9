//! The graphics model a diagram is laid out into.
//!
//! A [`Model`] is a flat, renderer-neutral description of a diagram: its
//! working size, its font height, the dash pattern to use for dashed lines,
//! and an ordered collection of [`Primitives`]. Layout appends primitives and
//! never mutates them afterwards; renderers only read.
//!
//! # Example
//!
//! ```
//! # use umli_core::graphics::{HJust, Model, VJust};
//! # use umli_core::geometry::Point;
//! let mut model = Model::new(2000.0, 20.0, 10.0, 6.0);
//! model.primitives.add_line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), false);
//! model.primitives.add_label("hello", 20.0, Point::new(50.0, 10.0), HJust::Centre, VJust::Top);
//!
//! assert_eq!(model.primitives.lines().len(), 1);
//! assert_eq!(model.primitives.labels().len(), 1);
//! ```

use crate::geometry::Point;

/// Horizontal justification of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HJust {
    Left,
    Centre,
    Right,
}

/// Vertical justification of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VJust {
    Top,
    Centre,
    Bottom,
}

/// A straight line from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub dashed: bool,
}

impl Line {
    pub fn new(p1: Point, p2: Point, dashed: bool) -> Self {
        Self { p1, p2, dashed }
    }

    /// Same end points (within tolerance) and same dash style.
    pub fn equal_ish(&self, other: &Line) -> bool {
        self.dashed == other.dashed && self.p1.equal_ish(other.p1) && self.p2.equal_ish(other.p2)
    }
}

/// An axis-aligned, unfilled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A closed polygon filled with the stroke color (arrow heads).
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPoly {
    pub vertices: Vec<Point>,
}

impl FilledPoly {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Whether any vertex equals `vertex` within tolerance.
    pub fn includes_vertex(&self, vertex: Point) -> bool {
        self.vertices.iter().any(|v| v.equal_ish(vertex))
    }
}

/// A single row of text positioned relative to its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_height: f32,
    pub anchor: Point,
    pub h_just: HJust,
    pub v_just: VJust,
}

impl Label {
    /// Same text and justification, anchor and font height within tolerance.
    pub fn equal_ish(&self, other: &Label) -> bool {
        self.text == other.text
            && self.h_just == other.h_just
            && self.v_just == other.v_just
            && self.anchor.equal_ish(other.anchor)
            && crate::geometry::val_equal_ish(self.font_height, other.font_height)
    }
}

/// Ordered, append-only collections of the four primitive kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitives {
    lines: Vec<Line>,
    rects: Vec<Rect>,
    filled_polys: Vec<FilledPoly>,
    labels: Vec<Label>,
}

impl Primitives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, p1: Point, p2: Point, dashed: bool) {
        self.lines.push(Line::new(p1, p2, dashed));
    }

    pub fn add_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.rects.push(Rect::new(left, top, right, bottom));
    }

    pub fn add_filled_poly(&mut self, vertices: Vec<Point>) {
        self.filled_polys.push(FilledPoly::new(vertices));
    }

    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        font_height: f32,
        anchor: Point,
        h_just: HJust,
        v_just: VJust,
    ) {
        self.labels.push(Label {
            text: text.into(),
            font_height,
            anchor,
            h_just,
            v_just,
        });
    }

    /// Adds one top-justified label per row, stacked downwards from
    /// `first_row` at a pitch of `font_height`.
    pub fn add_rows_of_text<S: AsRef<str>>(
        &mut self,
        first_row: Point,
        font_height: f32,
        h_just: HJust,
        rows: &[S],
    ) {
        for (i, row) in rows.iter().enumerate() {
            let anchor = first_row.with_y(first_row.y() + i as f32 * font_height);
            self.add_label(row.as_ref(), font_height, anchor, h_just, VJust::Top);
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn filled_polys(&self) -> &[FilledPoly] {
        &self.filled_polys
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn contains_line(&self, line: &Line) -> bool {
        self.lines.iter().any(|l| l.equal_ish(line))
    }

    pub fn contains_label(&self, label: &Label) -> bool {
        self.labels.iter().any(|l| l.equal_ish(label))
    }

    /// Total number of primitives of all kinds.
    pub fn len(&self) -> usize {
        self.lines.len() + self.rects.len() + self.filled_polys.len() + self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A laid out diagram.
///
/// `width` is a fixed working width. `height` is only known once layout
/// has finished and is zero until then.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub width: f32,
    pub height: f32,
    pub font_height: f32,
    pub dash_line_dash_len: f32,
    pub dash_line_gap_len: f32,
    pub primitives: Primitives,
}

impl Model {
    pub fn new(width: f32, font_height: f32, dash_line_dash_len: f32, dash_line_gap_len: f32) -> Self {
        Self {
            width,
            height: 0.0,
            font_height,
            dash_line_dash_len,
            dash_line_gap_len,
            primitives: Primitives::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_of_text_are_stacked_at_font_pitch() {
        let mut prims = Primitives::new();
        prims.add_rows_of_text(Point::new(100.0, 30.0), 10.0, HJust::Left, &["a", "b", "c"]);

        let labels = prims.labels();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].anchor, Point::new(100.0, 30.0));
        assert_eq!(labels[1].anchor, Point::new(100.0, 40.0));
        assert_eq!(labels[2].anchor, Point::new(100.0, 50.0));
        assert!(labels.iter().all(|l| l.v_just == VJust::Top));
        assert!(labels.iter().all(|l| l.h_just == HJust::Left));
    }

    #[test]
    fn test_contains_line_is_tolerant_and_dash_sensitive() {
        let mut prims = Primitives::new();
        prims.add_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), true);

        let close = Line::new(Point::new(0.0, 0.0004), Point::new(10.0, 0.0), true);
        assert!(prims.contains_line(&close));

        let solid = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), false);
        assert!(!prims.contains_line(&solid));
    }

    #[test]
    fn test_filled_poly_includes_vertex() {
        let poly = FilledPoly::new(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(5.0, -2.0),
        ]);
        assert!(poly.includes_vertex(Point::new(5.0, -2.0)));
        assert!(!poly.includes_vertex(Point::new(4.0, -2.0)));
    }

    #[test]
    fn test_primitive_counts() {
        let mut prims = Primitives::new();
        assert!(prims.is_empty());

        prims.add_rect(0.0, 0.0, 10.0, 20.0);
        prims.add_filled_poly(vec![Point::default()]);
        assert_eq!(prims.len(), 2);
        assert_eq!(prims.rects()[0].width(), 10.0);
        assert_eq!(prims.rects()[0].height(), 20.0);
    }

    #[test]
    fn test_new_model_has_no_height() {
        let model = Model::new(2000.0, 20.0, 10.0, 6.0);
        assert_eq!(model.height, 0.0);
        assert!(model.primitives.is_empty());
    }
}
