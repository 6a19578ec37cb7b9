//! Presentation of [`UmliError`]s as miette reports.
//!
//! A parse failure becomes one report per diagnostic, each with the script
//! as its source so that miette can underline the offending words. Every
//! other failure becomes a single report whose code names the stage that
//! failed.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceSpan};

use umli::{UmliError, layout};
use umli_parser::error::Diagnostic as ScriptDiagnostic;

/// One parse diagnostic together with the script it refers to.
#[derive(Debug)]
pub struct ScriptReport<'a> {
    diag: &'a ScriptDiagnostic,
    script: &'a str,
}

impl fmt::Display for ScriptReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for ScriptReport<'_> {}

impl Diagnostic for ScriptReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(if self.diag.severity().is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.script as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }
        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let text = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        })))
    }
}

/// A failure outside the parser: reading files, configuration, layout or
/// export.
#[derive(Debug)]
pub struct StageReport<'a>(&'a UmliError);

impl StageReport<'_> {
    fn stage(&self) -> &'static str {
        match self.0 {
            UmliError::Io(_) => "umli::io",
            UmliError::Parse { .. } => "umli::parse",
            UmliError::Config(_) => "umli::config",
            UmliError::Export(_) => "umli::export",
            UmliError::Layout(err) => match err {
                layout::Error::UnknownLifeline(_) => "umli::layout::unknown_lifeline",
                layout::Error::DuplicateLifeline(_) => "umli::layout::duplicate_lifeline",
                layout::Error::TerminateWithoutStart { .. } => "umli::layout::stop",
                layout::Error::UnknownSizerProperty(_) => "umli::layout::sizing",
                layout::Error::InvalidTextSize(_) => "umli::layout::text_size",
            },
        }
    }
}

impl fmt::Display for StageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for StageReport<'_> {}

impl Diagnostic for StageReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.stage()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            UmliError::Config(_) => "check the file given with --config, or umli/config.toml",
            UmliError::Layout(layout::Error::TerminateWithoutStart { .. }) => {
                "`stop X` ends an activity box; X must first receive a `full` or `self`"
            }
            UmliError::Layout(layout::Error::UnknownSizerProperty(_)) => {
                "the [layout.sizing] table takes property names such as `ArrowLen`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// The reports describing `err`, in the order they should be shown.
pub fn to_reportables(err: &UmliError) -> Vec<Box<dyn Diagnostic + '_>> {
    match err {
        UmliError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Box::new(ScriptReport { diag, script: src }) as Box<dyn Diagnostic + '_>)
            .collect(),
        _ => vec![Box::new(StageReport(err))],
    }
}

/// Render every report for `err` with miette's graphical handler.
pub fn render(err: &UmliError) -> Vec<String> {
    let handler = GraphicalReportHandler::new();
    to_reportables(err)
        .iter()
        .map(|report| {
            let mut out = String::new();
            match handler.render_report(&mut out, report.as_ref()) {
                Ok(()) => out,
                Err(_) => report.to_string(),
            }
        })
        .collect()
}
