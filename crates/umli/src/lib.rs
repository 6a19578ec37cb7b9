//! umli - sequence diagrams from a terse, line-oriented script.
//!
//! Parsing, layout, and SVG rendering for umli scripts. A script declares
//! lifelines with `life` and then lists the interactions between them, one
//! per line; the layout engine places everything from the top of the page
//! downwards.

pub mod config;
pub mod layout;

mod error;
mod export;

pub use umli_core::{color, dsl, geometry, graphics};

pub use error::UmliError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing, laying out and rendering umli diagrams.
///
/// # Examples
///
/// ```rust
/// use umli::{DiagramBuilder, config::AppConfig};
///
/// let source = "life A Client\nlife B Server\nfull AB get()\ndash BA ok\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let model = builder.parse(source).expect("Failed to parse");
/// let diagram = builder.create(&model).expect("Failed to lay out");
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source code into a statement model.
    ///
    /// # Errors
    ///
    /// Returns [`UmliError::Parse`] carrying every diagnostic in the script,
    /// together with the source so that they can be displayed in context.
    pub fn parse(&self, source: &str) -> Result<dsl::Model, UmliError> {
        info!("Parsing script");

        let model = umli_parser::parse(source)
            .map_err(|err| UmliError::new_parse_error(err, source))?;

        debug!(statements = model.statements().len(); "Script parsed successfully");
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Lay out a statement model.
    ///
    /// # Errors
    ///
    /// Returns [`UmliError::Layout`] when the model cannot be laid out, for
    /// example when it stops a lifeline that is not active.
    pub fn create(&self, model: &dsl::Model) -> Result<graphics::Model, UmliError> {
        info!("Laying out diagram");
        let creator = layout::Creator::new(self.config.layout())?;
        let diagram = creator.create(model)?;
        debug!(height = diagram.height; "Diagram laid out");
        Ok(diagram)
    }

    /// Render a laid out diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`UmliError::Export`] when the diagram cannot be rendered.
    pub fn render_svg(&self, diagram: &graphics::Model) -> Result<String, UmliError> {
        let mut buffer = Vec::new();
        export::svg::Svg::new(self.config.style()).export_diagram(diagram, &mut buffer)?;

        let svg = String::from_utf8(buffer)
            .map_err(|err| UmliError::from(export::Error::Render(err.to_string())))?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Parse, lay out and render `source` in one step.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage.
    pub fn build_svg(&self, source: &str) -> Result<String, UmliError> {
        let model = self.parse(source)?;
        let diagram = self.create(&model)?;
        self.render_svg(&diagram)
    }
}
