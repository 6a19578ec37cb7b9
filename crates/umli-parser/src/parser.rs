//! Line-oriented parser for umli scripts.
//!
//! A script holds one statement per line. Blank lines and lines starting
//! with `#` are skipped. Each statement starts with a keyword, followed by
//! the keyword's argument and, for most keywords, free label text:
//!
//! ```text
//! life A  Client app
//! life B  Server | (primary)
//! full AB get_user( | token)
//! dash BA user
//! self A  render
//! stop B
//! textsize 12
//! showletters false
//! ```
//!
//! Label text is split on `|` into rows, each trimmed. Every line is checked
//! on its own and against the lines before it; problems are collected as
//! diagnostics so that a script reports all of them in one pass.

use indexmap::IndexMap;
use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{opt, preceded},
    error::{ContextError, ErrMode},
    stream::Offset,
    token::{rest, take_while},
};

use umli_core::dsl::{Keyword, Model, Statement};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result},
    span::{Span, Spanned},
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError<&'static str>>>;

/// Accepted range for the `textsize` directive.
const TEXT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 5.0..=20.0;

/// A run of non-blank characters, after optional leading blanks.
fn word<'src>(input: &mut &'src str) -> IResult<&'src str> {
    preceded(space0, take_while(1.., |c: char| !c.is_whitespace())).parse_next(input)
}

/// Everything left on the line, without surrounding blanks.
fn text<'src>(input: &mut &'src str) -> IResult<&'src str> {
    preceded(space0, rest).map(str::trim_end).parse_next(input)
}

/// `keyword text...`
fn keyword_and_tail<'src>(input: &mut &'src str) -> IResult<(&'src str, &'src str)> {
    (word, text).parse_next(input)
}

/// `argument text...`; the argument is absent only for empty input.
fn argument_and_tail<'src>(input: &mut &'src str) -> IResult<(Option<&'src str>, &'src str)> {
    (opt(word), text).parse_next(input)
}

fn is_lifeline_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

fn is_lifeline_pair(pair: &str) -> bool {
    pair.len() == 2 && pair.chars().all(|c| c.is_ascii_uppercase())
}

/// Split label text into trimmed rows at each `|`.
fn label_rows(text: &str) -> Vec<String> {
    text.split('|').map(|row| row.trim().to_string()).collect()
}

fn keyword_list() -> String {
    Keyword::ALL
        .iter()
        .map(|k| format!("`{k}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

struct ScriptParser<'src> {
    source: &'src str,
    model: Model,
    /// Declared lifelines, in declaration order, with the span of the name.
    lifelines: IndexMap<&'src str, Span>,
    /// First occurrence of each directive.
    directives: IndexMap<Keyword, Span>,
    diagnostics: DiagnosticCollector,
}

impl<'src> ScriptParser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            model: Model::new(),
            lifelines: IndexMap::new(),
            directives: IndexMap::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Span of `part`, which must be a slice of the source.
    fn span_of(&self, part: &'src str) -> Span {
        let start = part.offset_from(&self.source);
        Span::new(start..start + part.len())
    }

    fn spanned(&self, part: &'src str) -> Spanned<&'src str> {
        Spanned::new(part, self.span_of(part))
    }

    fn parse(mut self) -> std::result::Result<Model, ParseError> {
        let source = self.source;
        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.parse_line(line) {
                Ok(statement) => {
                    trace!(line = index + 1, keyword:? = statement.keyword; "Parsed statement");
                    self.model.append(statement);
                }
                Err(diagnostic) => {
                    debug!(line = index + 1; "Rejected statement: {diagnostic}");
                    self.diagnostics.emit(diagnostic);
                }
            }
        }

        self.diagnostics.finish()?;
        debug!(
            statements = self.model.statements().len(),
            lifelines = self.lifelines.len();
            "Parsed script"
        );
        Ok(self.model)
    }

    fn parse_line(&mut self, line: &'src str) -> Result<Statement> {
        let mut input = line;
        let (keyword_text, tail) = keyword_and_tail
            .parse_next(&mut input)
            .map_err(|_| self.too_few_words(line))?;

        let keyword = Keyword::ALL
            .into_iter()
            .find(|k| k.as_str() == keyword_text)
            .ok_or_else(|| {
                Diagnostic::error(format!("unrecognized keyword `{keyword_text}`"))
                    .with_code(ErrorCode::E101)
                    .with_label(self.span_of(keyword_text), "not a keyword")
                    .with_help(format!("statements start with one of {}", keyword_list()))
            })?;

        if tail.is_empty() {
            return Err(self.too_few_words(line));
        }

        match keyword {
            Keyword::Life => self.life(tail),
            Keyword::Title => Ok(Statement::title(label_rows(tail))),
            Keyword::Full | Keyword::Dash => self.interaction(keyword, tail),
            Keyword::SelfCall => self.self_call(tail),
            Keyword::Stop => self.stop(tail),
            Keyword::TextSize => self.text_size(tail),
            Keyword::ShowLetters => self.show_letters(tail),
        }
    }

    fn too_few_words(&self, line: &'src str) -> Diagnostic {
        Diagnostic::error("statement must have at least 2 words")
            .with_code(ErrorCode::E100)
            .with_label(self.span_of(line), "incomplete statement")
    }

    /// Split a non-empty tail into its first word and the text after it.
    fn argument(&self, tail: &'src str) -> Result<(Spanned<&'src str>, &'src str)> {
        let mut input = tail;
        match argument_and_tail.parse_next(&mut input) {
            Ok((Some(argument), rest)) => Ok((self.spanned(argument), rest)),
            _ => Err(self.too_few_words(tail)),
        }
    }

    fn lifeline_name(&self, name: Spanned<&'src str>) -> Result<&'src str> {
        if is_lifeline_name(&name) {
            return Ok(name.into_inner());
        }
        Err(
            Diagnostic::error("lifeline name must be a single upper case letter")
                .with_code(ErrorCode::E102)
                .with_label(name.span(), "invalid lifeline name"),
        )
    }

    fn known_lifeline(&self, name: &'src str) -> Result<&'src str> {
        if self.lifelines.contains_key(name) {
            return Ok(name);
        }
        Err(Diagnostic::error(format!("unknown lifeline `{name}`"))
            .with_code(ErrorCode::E200)
            .with_label(self.span_of(name), "not declared by an earlier `life` statement")
            .with_help(format!("declare it first with `life {name} <label>`")))
    }

    fn required_label(&self, after: Spanned<&'src str>, label: &'src str) -> Result<Vec<String>> {
        if label.is_empty() {
            return Err(Diagnostic::error("label text missing")
                .with_code(ErrorCode::E104)
                .with_label(after.span(), "expected label text after this"));
        }
        Ok(label_rows(label))
    }

    fn no_trailing_text(&self, trailing: &'src str) -> Result<()> {
        if trailing.is_empty() {
            return Ok(());
        }
        Err(Diagnostic::error("unexpected text after the statement")
            .with_code(ErrorCode::E107)
            .with_label(self.span_of(trailing), "remove this"))
    }

    fn life(&mut self, tail: &'src str) -> Result<Statement> {
        let (name, label) = self.argument(tail)?;
        let letter = self.lifeline_name(name)?;
        let rows = self.required_label(name, label)?;

        if let Some(first) = self.lifelines.get(letter) {
            return Err(
                Diagnostic::error(format!("lifeline `{letter}` is declared more than once"))
                    .with_code(ErrorCode::E201)
                    .with_label(name.span(), "duplicate declaration")
                    .with_secondary_label(*first, "first declared here")
                    .with_help("give each lifeline its own letter"),
            );
        }
        self.lifelines.insert(letter, name.span());

        Ok(Statement::life(letter, rows))
    }

    fn interaction(&self, keyword: Keyword, tail: &'src str) -> Result<Statement> {
        let (pair, label) = self.argument(tail)?;
        if !is_lifeline_pair(&pair) {
            return Err(
                Diagnostic::error("lifelines specified must be two upper case letters")
                    .with_code(ErrorCode::E103)
                    .with_label(pair.span(), "expected two lifeline letters, such as `AB`"),
            );
        }

        let (from, to) = pair.into_inner().split_at(1);
        if from == to {
            return Err(
                Diagnostic::error(format!("`{keyword}` needs two different lifelines"))
                    .with_code(ErrorCode::E203)
                    .with_label(pair.span(), "same lifeline at both ends")
                    .with_help(format!("use `self {from} <label>` for a lifeline calling itself")),
            );
        }
        let from = self.known_lifeline(from)?;
        let to = self.known_lifeline(to)?;
        let rows = self.required_label(pair, label)?;

        Ok(match keyword {
            Keyword::Dash => Statement::dash(from, to, rows),
            _ => Statement::full(from, to, rows),
        })
    }

    fn self_call(&self, tail: &'src str) -> Result<Statement> {
        let (name, label) = self.argument(tail)?;
        let letter = self.known_lifeline(self.lifeline_name(name)?)?;
        let rows = self.required_label(name, label)?;
        Ok(Statement::self_call(letter, rows))
    }

    fn stop(&self, tail: &'src str) -> Result<Statement> {
        let (name, trailing) = self.argument(tail)?;
        let letter = self.known_lifeline(self.lifeline_name(name)?)?;
        self.no_trailing_text(trailing)?;
        Ok(Statement::stop(letter))
    }

    fn text_size(&mut self, tail: &'src str) -> Result<Statement> {
        let (value, trailing) = self.argument(tail)?;
        self.no_trailing_text(trailing)?;

        let size: f32 = value.parse().map_err(|_| {
            Diagnostic::error(format!("`{}` is not a number", *value))
                .with_code(ErrorCode::E105)
                .with_label(value.span(), "expected a number")
        })?;
        if !TEXT_SIZE_RANGE.contains(&size) {
            return Err(Diagnostic::error(format!("text size {size} is out of range"))
                .with_code(ErrorCode::E202)
                .with_label(value.span(), "must be between 5 and 20")
                .with_help("5 gives small text, 10 is the default, 20 gives large text"));
        }

        self.note_directive(Keyword::TextSize, value.span());
        Ok(Statement::text_size(size))
    }

    fn show_letters(&mut self, tail: &'src str) -> Result<Statement> {
        let (value, trailing) = self.argument(tail)?;
        self.no_trailing_text(trailing)?;

        let show = match *value.inner() {
            "true" => true,
            "false" => false,
            other => {
                return Err(Diagnostic::error(format!("`{other}` is not a boolean"))
                    .with_code(ErrorCode::E106)
                    .with_label(value.span(), "expected `true` or `false`"));
            }
        };

        self.note_directive(Keyword::ShowLetters, value.span());
        Ok(Statement::show_letters(show))
    }

    /// Warn when a directive repeats; only the first one is honoured.
    fn note_directive(&mut self, keyword: Keyword, span: Span) {
        if let Some(first) = self.directives.get(&keyword) {
            self.diagnostics.emit(
                Diagnostic::warning(format!("`{keyword}` is given more than once"))
                    .with_code(ErrorCode::W300)
                    .with_label(span, "ignored")
                    .with_secondary_label(*first, "this value is used"),
            );
        } else {
            self.directives.insert(keyword, span);
        }
    }
}

/// Parse a whole script into a statement model.
///
/// All diagnostics are collected; the script is rejected if any of them is
/// an error.
pub(crate) fn parse_script(source: &str) -> std::result::Result<Model, ParseError> {
    ScriptParser::new(source).parse()
}
