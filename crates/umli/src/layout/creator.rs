//! The layout engine's entry point.

use log::{debug, info, trace};

use umli_core::{
    dsl::{self, Keyword},
    graphics,
};

use super::{
    Error, LifelineId, Result,
    activity::BoxTracker,
    finalizer::Finalizer,
    frame::FrameMaker,
    interactions::Maker,
    nogo::NoGoZones,
    sizer::{LiteralSizer, Property, ProportionalSizer, Sizer},
    spacing::Spacing,
};
use crate::config::LayoutConfig;

/// Width of every diagram in working units. Renderers rescale it.
pub const DIAGRAM_WIDTH: f32 = 2000.0;

/// Turns a statement model into a graphics model.
///
/// # Example
///
/// ```
/// # use umli::{config::LayoutConfig, layout::Creator};
/// # use umli_core::dsl::{Model, Statement};
/// let model: Model = [
///     Statement::life("A", ["Client"]),
///     Statement::life("B", ["Server"]),
///     Statement::full("A", "B", ["get()"]),
///     Statement::dash("B", "A", ["ok"]),
/// ]
/// .into_iter()
/// .collect();
///
/// let creator = Creator::new(&LayoutConfig::default()).unwrap();
/// let diagram = creator.create(&model).unwrap();
/// assert_eq!(diagram.width, 2000.0);
/// assert!(diagram.height > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Creator {
    default_text_size: f32,
    show_letters: bool,
    overrides: LiteralSizer,
}

impl Creator {
    /// # Errors
    ///
    /// Returns [`Error::UnknownSizerProperty`] when the configuration names
    /// a size that does not exist.
    pub fn new(config: &LayoutConfig) -> Result<Self> {
        Ok(Self {
            default_text_size: config.default_text_size(),
            show_letters: config.show_letters(),
            overrides: config.sizer_overrides()?,
        })
    }

    /// Lay out every statement of `model`.
    ///
    /// # Errors
    ///
    /// Creation stops at the first error; no partial diagram is produced.
    pub fn create(&self, model: &dsl::Model) -> Result<graphics::Model> {
        let text_size = model
            .first_statement_of_type(Keyword::TextSize)
            .and_then(|s| s.text_size)
            .unwrap_or(self.default_text_size);
        if !(text_size.is_finite() && text_size > 0.0) {
            return Err(Error::InvalidTextSize(text_size));
        }
        let show_letters = model
            .first_statement_of_type(Keyword::ShowLetters)
            .and_then(|s| s.show_letters)
            .unwrap_or(self.show_letters);

        let width = DIAGRAM_WIDTH;
        let font_height = width * text_size / 1000.0;
        info!(text_size, font_height, show_letters; "Creating diagram");

        let sizer = ProportionalSizer::new(width, font_height).with_overrides(&self.overrides);
        let mut names = Vec::new();
        let mut labels = Vec::new();
        for statement in model.lifeline_statements() {
            let mut rows = statement.label_segments.clone();
            if show_letters {
                rows.push(String::new());
                rows.push(statement.lifeline_name.clone());
            }
            names.push(statement.lifeline_name.as_str());
            labels.push(rows);
        }

        Layout::new(&sizer, width, font_height, &names)?.run(model, &labels)
    }
}

/// State of one diagram while it is being laid out.
struct Layout<'a> {
    sizer: &'a dyn Sizer,
    width: f32,
    font_height: f32,
    spacing: Spacing,
    trackers: Vec<BoxTracker>,
    zones: NoGoZones,
    diagram: graphics::Model,
}

impl<'a> Layout<'a> {
    fn new(sizer: &'a dyn Sizer, width: f32, font_height: f32, names: &[&str]) -> Result<Self> {
        let spacing = Spacing::new(sizer, width, font_height, names)?;
        let diagram = graphics::Model::new(
            width,
            font_height,
            sizer.get(Property::DashLineDashLen)?,
            sizer.get(Property::DashLineDashGap)?,
        );
        Ok(Self {
            sizer,
            width,
            font_height,
            spacing,
            trackers: vec![BoxTracker::new(); names.len()],
            zones: NoGoZones::new(),
            diagram,
        })
    }

    fn frame(&mut self) -> FrameMaker<'_> {
        FrameMaker {
            sizer: self.sizer,
            width: self.width,
            font_height: self.font_height,
            primitives: &mut self.diagram.primitives,
        }
    }

    fn run(mut self, model: &dsl::Model, labels: &[Vec<String>]) -> Result<graphics::Model> {
        let mut tide = self.sizer.get(Property::DiagramPadT)?;
        if let Some(title) = model.first_statement_of_type(Keyword::Title) {
            tide = self.frame().title(&title.label_segments, tide)?;
        }
        let boxes = FrameMaker {
            sizer: self.sizer,
            width: self.width,
            font_height: self.font_height,
            primitives: &mut self.diagram.primitives,
        }
        .title_boxes(&self.spacing, labels, tide)?;
        tide = boxes.tide;
        debug!(lifelines = labels.len(), tide; "Top of diagram done");

        for (index, statement) in model.statements().iter().enumerate() {
            tide = Maker {
                sizer: self.sizer,
                spacing: &self.spacing,
                font_height: self.font_height,
                trackers: &mut self.trackers,
                zones: &mut self.zones,
                primitives: &mut self.diagram.primitives,
            }
            .make(statement, tide)?;
            trace!(index, keyword:? = statement.keyword, tide; "Statement laid out");
        }

        tide = self.close_activity_boxes(tide)?;
        debug!(tide, zones = self.zones.len(); "Statements laid out");

        Finalizer {
            spacing: &self.spacing,
            trackers: &self.trackers,
            zones: &self.zones,
        }
        .finalize(
            boxes.bottom,
            tide,
            self.sizer.get(Property::MinLifelineSegLength)?,
            &mut self.diagram.primitives,
        )?;

        tide = self.frame().finalize_frame(tide)?;
        self.diagram.height = tide + self.sizer.get(Property::DiagramPadB)?;
        info!(
            height = self.diagram.height,
            primitives = self.diagram.primitives.len();
            "Diagram created"
        );
        Ok(self.diagram)
    }

    /// Close every activity box still open at the end of the statements.
    fn close_activity_boxes(&mut self, tide: f32) -> Result<f32> {
        let bottom = tide + self.sizer.get(Property::ActivityBoxVerticalOverlap)?;
        for (index, tracker) in self.trackers.iter_mut().enumerate() {
            if !tracker.in_progress() {
                continue;
            }
            tracker.terminate_at(bottom)?;
            let top = tracker.most_recent().map_or(bottom, |interval| interval.start);
            let (left, right) = self.spacing.activity_box_x(LifelineId::new(index))?;
            self.diagram.primitives.add_rect(left, top, right, bottom);
        }
        Ok(bottom + self.sizer.get(Property::FinalizedActivityBoxesPadB)?)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use umli_core::{dsl::Statement, graphics::Rect};

    use super::*;

    fn model(statements: impl IntoIterator<Item = Statement>) -> dsl::Model {
        statements.into_iter().collect()
    }

    fn two_lifelines() -> Vec<Statement> {
        vec![
            Statement::life("A", ["App"]),
            Statement::life("B", ["Core", "API"]),
        ]
    }

    fn create(statements: impl IntoIterator<Item = Statement>) -> Result<graphics::Model> {
        Creator::new(&LayoutConfig::default())?.create(&model(statements))
    }

    fn label_texts(diagram: &graphics::Model) -> Vec<&str> {
        diagram
            .primitives
            .labels()
            .iter()
            .map(|label| label.text.as_str())
            .collect()
    }

    #[test]
    fn test_font_height_follows_text_size() {
        let diagram = create(two_lifelines()).unwrap();
        assert_eq!(diagram.font_height, 20.0);

        let mut statements = two_lifelines();
        statements.push(Statement::text_size(5.0));
        let diagram = create(statements).unwrap();
        assert_eq!(diagram.font_height, 10.0);
        assert_eq!(diagram.width, DIAGRAM_WIDTH);
    }

    #[test]
    fn test_configured_text_size_is_the_default() {
        let creator = Creator::new(&LayoutConfig::new(15.0, true)).unwrap();
        let diagram = creator.create(&model(two_lifelines())).unwrap();
        assert_eq!(diagram.font_height, 30.0);
    }

    #[test]
    fn test_zero_text_size_is_rejected() {
        let mut statements = two_lifelines();
        statements.push(Statement::text_size(0.0));
        assert_eq!(create(statements), Err(Error::InvalidTextSize(0.0)));
    }

    #[test]
    fn test_lifeline_letters_are_appended() {
        let diagram = create(two_lifelines()).unwrap();
        assert_eq!(label_texts(&diagram), vec!["App", "", "A", "Core", "API", "", "B"]);
    }

    #[test]
    fn test_lifeline_letters_can_be_hidden() {
        let mut statements = two_lifelines();
        statements.push(Statement::show_letters(false));
        let diagram = create(statements).unwrap();
        assert_eq!(label_texts(&diagram), vec!["App", "Core", "API"]);

        let creator = Creator::new(&LayoutConfig::new(10.0, false)).unwrap();
        let diagram = creator.create(&model(two_lifelines())).unwrap();
        assert_eq!(label_texts(&diagram).len(), 3);
    }

    #[test]
    fn test_frame_encloses_the_diagram() {
        let diagram = create(two_lifelines()).unwrap();
        let sizer = ProportionalSizer::new(DIAGRAM_WIDTH, 20.0);
        let pad_l = sizer.get(Property::DiagPadL).unwrap();
        let pad_t = sizer.get(Property::DiagramPadT).unwrap();
        let pad_b = sizer.get(Property::DiagramPadB).unwrap();

        let frame = diagram.primitives.rects().last().copied().unwrap();
        assert_eq!(frame.left, pad_l);
        assert_eq!(frame.top, pad_t);
        assert_eq!(frame.right, DIAGRAM_WIDTH - pad_l);
        assert!(approx_eq!(f32, diagram.height, frame.bottom + pad_b, epsilon = 1e-3));
    }

    #[test]
    fn test_title_is_drawn_above_the_lifelines() {
        let mut statements = two_lifelines();
        statements.push(Statement::title(["Checkout"]));
        let diagram = create(statements).unwrap();

        let title = &diagram.primitives.labels()[0];
        assert_eq!(title.text, "Checkout");
        let title_box = diagram.primitives.rects()[0];
        assert!(title_box.top > title.anchor.y() + diagram.font_height);
        assert_eq!(diagram.primitives.lines().len(), 2 + 2);
    }

    #[test]
    fn test_open_boxes_are_closed_at_the_end() {
        let mut statements = two_lifelines();
        statements.push(Statement::full("A", "B", ["call"]));
        let diagram = create(statements).unwrap();

        // Two title boxes, two activity boxes, the frame.
        let rects = diagram.primitives.rects();
        assert_eq!(rects.len(), 5);
        let (a_box, b_box) = (rects[2], rects[3]);
        assert_eq!(a_box.bottom, b_box.bottom);
        assert!(a_box.top < b_box.top);
        assert!(rects[4].bottom > a_box.bottom);
    }

    #[test]
    fn test_stopped_box_is_not_drawn_twice() {
        let mut statements = two_lifelines();
        statements.push(Statement::full("A", "B", ["call"]));
        statements.push(Statement::stop("B"));
        let diagram = create(statements).unwrap();

        let activity: Vec<Rect> = diagram.primitives.rects()[2..4].to_vec();
        assert_eq!(diagram.primitives.rects().len(), 5);
        assert!(activity[0].bottom < activity[1].bottom);
    }

    #[test]
    fn test_lifelines_are_dashed_and_broken_by_activity() {
        let mut statements = two_lifelines();
        statements.push(Statement::full("A", "B", ["call"]));
        statements.push(Statement::stop("B"));
        let diagram = create(statements).unwrap();

        let lines = diagram.primitives.lines();
        assert!(lines.iter().filter(|line| line.dashed).all(|line| line.p1.x() == line.p2.x()));

        // B stops above the end of the diagram, so its stroke resumes below
        // the stopped box.
        let b_x = lines.iter().map(|line| line.p1.x()).fold(f32::MIN, f32::max);
        let b_strokes: Vec<_> = lines
            .iter()
            .filter(|line| line.dashed && line.p1.x() == b_x)
            .collect();
        assert_eq!(b_strokes.len(), 2);
        let stopped_box = diagram.primitives.rects()[2];
        assert!(b_strokes[0].p2.y() <= stopped_box.top);
        assert!(b_strokes[1].p1.y() >= stopped_box.bottom);
    }

    #[test]
    fn test_stop_without_activity_fails() {
        let mut statements = two_lifelines();
        statements.push(Statement::stop("A"));
        assert!(matches!(create(statements), Err(Error::TerminateWithoutStart { .. })));
    }

    #[test]
    fn test_unknown_lifeline_fails() {
        let mut statements = two_lifelines();
        statements.push(Statement::full("A", "C", ["call"]));
        assert_eq!(create(statements), Err(Error::UnknownLifeline("C".to_string())));
    }

    #[test]
    fn test_redeclared_lifeline_fails() {
        let mut statements = two_lifelines();
        statements.push(Statement::life("A", ["Again"]));
        statements.push(Statement::full("A", "B", ["call"]));
        assert_eq!(create(statements), Err(Error::DuplicateLifeline("A".to_string())));
    }

    #[test]
    fn test_unknown_sizing_name_fails_early() {
        let config = LayoutConfig::default().with_sizing("Bogus", 1.0);
        assert_eq!(
            Creator::new(&config).unwrap_err(),
            Error::UnknownSizerProperty("Bogus".to_string())
        );
    }

    #[test]
    fn test_sizing_overrides_reach_layout() {
        let config = LayoutConfig::default().with_sizing("DiagramPadB", 100.0);
        let creator = Creator::new(&config).unwrap();
        let plain = create(two_lifelines()).unwrap();
        let padded = creator.create(&model(two_lifelines())).unwrap();
        assert!(approx_eq!(f32, padded.height - plain.height, 90.0, epsilon = 1e-3));
    }

    fn statement_strategy(lifelines: usize) -> impl Strategy<Value = Statement> {
        let name = move || (0..lifelines).prop_map(|i| char::from(b'A' + i as u8).to_string());
        prop_oneof![
            (name(), name()).prop_map(|(a, b)| Statement::full(&a, &b, ["call"])),
            (name(), name()).prop_map(|(a, b)| Statement::dash(&a, &b, ["return", "value"])),
            name().prop_map(|a| Statement::self_call(&a, ["think"])),
        ]
    }

    /// Every primitive lies inside the diagram, whatever the statements.
    fn check_everything_fits(statements: Vec<Statement>, lifelines: usize) -> Result<(), TestCaseError> {
        let mut all: Vec<Statement> = (0..lifelines)
            .map(|i| Statement::life(&char::from(b'A' + i as u8).to_string(), ["L"]))
            .collect();
        all.extend(statements);

        let diagram = create(all).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let prims = &diagram.primitives;
        let ys = prims
            .lines()
            .iter()
            .flat_map(|line| [line.p1.y(), line.p2.y()])
            .chain(prims.rects().iter().flat_map(|rect| [rect.top, rect.bottom]))
            .chain(prims.labels().iter().map(|label| label.anchor.y()));
        for y in ys {
            prop_assert!(y >= 0.0 && y <= diagram.height, "{y} outside 0..{}", diagram.height);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn everything_fits(
            (lifelines, statements) in (2usize..6).prop_flat_map(|n| {
                (Just(n), prop::collection::vec(statement_strategy(n), 0..12))
            })
        ) {
            check_everything_fits(statements, lifelines)?;
        }
    }
}
