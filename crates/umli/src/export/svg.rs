//! SVG rendering of graphics models.
//!
//! The document's `viewBox` is the diagram's own working coordinate system,
//! so primitives are written out unchanged; only the document's `width`
//! and `height` are scaled to the configured output width.

use std::io::{self, Write};

use log::{debug, info};
use svg::{self, node::Text as SvgText, node::element as svg_element};

use umli_core::{
    color::Color,
    graphics::{self, FilledPoly, HJust, Label, Line, Rect, VJust},
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Stroke width as a fraction of the font height.
const STROKE_WIDTH_RATIO: f32 = 0.1;

/// Renders diagrams to SVG with a fixed style.
#[derive(Debug, Clone)]
pub struct Svg {
    style: StyleConfig,
}

impl Svg {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            style: style.clone(),
        }
    }

    fn color(&self) -> &Color {
        self.style.stroke_color()
    }

    /// Build the SVG document for `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when the diagram or the output width has no
    /// positive, finite size.
    pub fn render_diagram(&self, diagram: &graphics::Model) -> Result<svg::Document, Error> {
        let (width, height) = (diagram.width, diagram.height);
        for (name, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Render(format!("diagram {name} must be positive, got {value}")));
            }
        }
        let output_width = self.style.output_width();
        if !(output_width.is_finite() && output_width > 0.0) {
            return Err(Error::Render(format!(
                "output width must be positive, got {output_width}"
            )));
        }
        let output_height = output_width * height / width;
        debug!(output_width, output_height; "SVG dimensions");

        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", output_width)
            .set("height", output_height);

        if let Some(background) = self.style.background_color() {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        let stroke_width = STROKE_WIDTH_RATIO * diagram.font_height;
        let mut group = svg_element::Group::new()
            .set("stroke", self.color())
            .set("stroke-opacity", self.color().alpha())
            .set("stroke-width", stroke_width);

        let primitives = &diagram.primitives;
        for line in primitives.lines() {
            group = group.add(self.render_line(line, diagram));
        }
        for rect in primitives.rects() {
            group = group.add(self.render_rect(rect));
        }
        for poly in primitives.filled_polys() {
            group = group.add(self.render_filled_poly(poly));
        }
        for label in primitives.labels() {
            group = group.add(self.render_label(label));
        }

        Ok(doc.add(group))
    }

    fn render_line(&self, line: &Line, diagram: &graphics::Model) -> svg_element::Line {
        let element = svg_element::Line::new()
            .set("x1", line.p1.x())
            .set("y1", line.p1.y())
            .set("x2", line.p2.x())
            .set("y2", line.p2.y());
        if line.dashed {
            element.set(
                "stroke-dasharray",
                format!("{} {}", diagram.dash_line_dash_len, diagram.dash_line_gap_len),
            )
        } else {
            element
        }
    }

    fn render_rect(&self, rect: &Rect) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", rect.left)
            .set("y", rect.top)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", "none")
    }

    fn render_filled_poly(&self, poly: &FilledPoly) -> svg_element::Polygon {
        let points = poly
            .vertices
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        svg_element::Polygon::new()
            .set("points", points)
            .set("fill", self.color())
    }

    fn render_label(&self, label: &Label) -> svg_element::Text {
        let anchor = match label.h_just {
            HJust::Left => "start",
            HJust::Centre => "middle",
            HJust::Right => "end",
        };
        let baseline = match label.v_just {
            VJust::Top => "text-before-edge",
            VJust::Centre => "central",
            VJust::Bottom => "text-after-edge",
        };
        svg_element::Text::new("")
            .set("x", label.anchor.x())
            .set("y", label.anchor.y())
            .set("text-anchor", anchor)
            .set("dominant-baseline", baseline)
            .set("font-family", self.style.font_family())
            .set("font-size", label.font_height)
            .set("stroke", "none")
            .set("fill", self.color())
            .add(SvgText::new(label.text.as_str()))
    }
}

impl Exporter for Svg {
    fn export_diagram(
        &self,
        diagram: &graphics::Model,
        writer: &mut dyn io::Write,
    ) -> Result<(), Error> {
        let doc = self.render_diagram(diagram)?;
        debug!("SVG document rendered");
        write!(writer, "{doc}")?;
        info!(primitives = diagram.primitives.len(); "SVG exported");
        Ok(())
    }
}
