//! The umli command line tool: script in, SVG out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use umli::{DiagramBuilder, UmliError};

/// Convert the script at `args.input` into an SVG file at `args.output`.
///
/// Nothing is written unless the whole script parses, lays out and renders.
///
/// # Errors
///
/// Returns the first [`UmliError`] met while loading the configuration,
/// reading the script, building the diagram or writing the SVG.
pub fn run(args: &Args) -> Result<(), UmliError> {
    info!(input_path = args.input, output_path = args.output; "Processing diagram");

    let builder = DiagramBuilder::new(config::load_config(args.config.as_ref())?);
    let svg = convert(&builder, Path::new(&args.input))?;
    fs::write(&args.output, &svg)?;

    info!(output_file = args.output, bytes = svg.len(); "SVG exported successfully");
    Ok(())
}

fn convert(builder: &DiagramBuilder, input: &Path) -> Result<String, UmliError> {
    let source = fs::read_to_string(input)?;
    debug!(bytes = source.len(), lines = source.lines().count(); "Script read");
    builder.build_svg(&source)
}
