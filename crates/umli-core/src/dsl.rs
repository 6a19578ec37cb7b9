//! The statement model of a umli script.
//!
//! A parsed script is an ordered list of [`Statement`]s held in a [`Model`].
//! Statements refer to lifelines by their single-letter name; the order in
//! which `life` statements appear fixes each lifeline's position from left to
//! right.
//!
//! # Example
//!
//! ```
//! # use umli_core::dsl::{Keyword, Model, Statement};
//! let mut model = Model::new();
//! model.append(Statement::life("A", ["Client"]));
//! model.append(Statement::life("B", ["Server"]));
//! model.append(Statement::full("A", "B", ["get()"]));
//!
//! assert_eq!(model.lifeline_statements().count(), 2);
//! assert!(model.lifeline_by_name("B").is_some());
//! assert!(model.first_statement_of_type(Keyword::Full).is_some());
//! ```

use std::fmt;

/// The closed set of statement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Declares a lifeline.
    Life,
    /// Sets the diagram title.
    Title,
    /// A synchronous call, drawn as a solid line.
    Full,
    /// An asynchronous return, drawn as a dashed line.
    Dash,
    /// A lifeline calling itself, drawn as a loop.
    SelfCall,
    /// Explicitly ends the activity on a lifeline.
    Stop,
    /// Sets the font size relative to the diagram width.
    TextSize,
    /// Controls whether lifeline letters are shown in title boxes.
    ShowLetters,
}

impl Keyword {
    /// All keywords, in the order the DSL documents them.
    pub const ALL: [Keyword; 8] = [
        Keyword::Life,
        Keyword::Title,
        Keyword::Full,
        Keyword::Dash,
        Keyword::SelfCall,
        Keyword::Stop,
        Keyword::TextSize,
        Keyword::ShowLetters,
    ];

    /// The word that introduces this statement in a script.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Life => "life",
            Keyword::Title => "title",
            Keyword::Full => "full",
            Keyword::Dash => "dash",
            Keyword::SelfCall => "self",
            Keyword::Stop => "stop",
            Keyword::TextSize => "textsize",
            Keyword::ShowLetters => "showletters",
        }
    }

    /// How many lifelines a statement of this kind references.
    pub fn referenced_lifeline_count(self) -> usize {
        match self {
            Keyword::Full | Keyword::Dash => 2,
            Keyword::SelfCall | Keyword::Stop => 1,
            Keyword::Life | Keyword::Title | Keyword::TextSize | Keyword::ShowLetters => 0,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a umli script.
///
/// Only the fields relevant to the statement's [`Keyword`] are populated:
/// `lifeline_name` for `life`, `referenced_lifelines` for interactions and
/// `stop`, `text_size` and `show_letters` for their directives.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub keyword: Keyword,
    pub lifeline_name: String,
    pub referenced_lifelines: Vec<String>,
    pub label_segments: Vec<String>,
    pub text_size: Option<f32>,
    pub show_letters: Option<bool>,
}

impl Statement {
    fn bare(keyword: Keyword) -> Self {
        Self {
            keyword,
            lifeline_name: String::new(),
            referenced_lifelines: Vec::new(),
            label_segments: Vec::new(),
            text_size: None,
            show_letters: None,
        }
    }

    pub fn life<S: Into<String>>(name: &str, label: impl IntoIterator<Item = S>) -> Self {
        Self {
            lifeline_name: name.to_string(),
            label_segments: label.into_iter().map(Into::into).collect(),
            ..Self::bare(Keyword::Life)
        }
    }

    pub fn title<S: Into<String>>(label: impl IntoIterator<Item = S>) -> Self {
        Self {
            label_segments: label.into_iter().map(Into::into).collect(),
            ..Self::bare(Keyword::Title)
        }
    }

    pub fn full<S: Into<String>>(from: &str, to: &str, label: impl IntoIterator<Item = S>) -> Self {
        Self::interaction(Keyword::Full, from, to, label)
    }

    pub fn dash<S: Into<String>>(from: &str, to: &str, label: impl IntoIterator<Item = S>) -> Self {
        Self::interaction(Keyword::Dash, from, to, label)
    }

    fn interaction<S: Into<String>>(
        keyword: Keyword,
        from: &str,
        to: &str,
        label: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            referenced_lifelines: vec![from.to_string(), to.to_string()],
            label_segments: label.into_iter().map(Into::into).collect(),
            ..Self::bare(keyword)
        }
    }

    pub fn self_call<S: Into<String>>(lifeline: &str, label: impl IntoIterator<Item = S>) -> Self {
        Self {
            referenced_lifelines: vec![lifeline.to_string()],
            label_segments: label.into_iter().map(Into::into).collect(),
            ..Self::bare(Keyword::SelfCall)
        }
    }

    pub fn stop(lifeline: &str) -> Self {
        Self {
            referenced_lifelines: vec![lifeline.to_string()],
            ..Self::bare(Keyword::Stop)
        }
    }

    pub fn text_size(size: f32) -> Self {
        Self {
            text_size: Some(size),
            ..Self::bare(Keyword::TextSize)
        }
    }

    pub fn show_letters(show: bool) -> Self {
        Self {
            show_letters: Some(show),
            ..Self::bare(Keyword::ShowLetters)
        }
    }
}

/// An ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    statements: Vec<Statement>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The `life` statements, in declaration order.
    pub fn lifeline_statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .filter(|s| s.keyword == Keyword::Life)
    }

    /// The `life` statement declaring `name`, if any.
    pub fn lifeline_by_name(&self, name: &str) -> Option<&Statement> {
        self.lifeline_statements()
            .find(|s| s.lifeline_name == name)
    }

    pub fn first_statement_of_type(&self, keyword: Keyword) -> Option<&Statement> {
        self.statements.iter().find(|s| s.keyword == keyword)
    }
}

impl FromIterator<Statement> for Model {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifeline_statements_skip_other_keywords() {
        let model: Model = [
            Statement::life("A", ["unused"]),
            Statement::title(["unused"]),
            Statement::life("C", ["unused"]),
        ]
        .into_iter()
        .collect();

        let lifelines: Vec<_> = model.lifeline_statements().collect();
        assert_eq!(lifelines.len(), 2);
        assert_eq!(lifelines[0].lifeline_name, "A");
        assert_eq!(lifelines[1].lifeline_name, "C");
    }

    #[test]
    fn test_lifeline_by_name_ignores_non_life_statements() {
        let mut model = Model::new();
        model.append(Statement::life("A", ["foo"]));
        model.append(Statement::full("A", "B", ["bar"]));
        model.append(Statement::life("B", ["bar"]));

        let found = model.lifeline_by_name("B").unwrap();
        assert_eq!(found.keyword, Keyword::Life);
        assert_eq!(found.label_segments, vec!["bar"]);
        assert!(model.lifeline_by_name("Z").is_none());
    }

    #[test]
    fn test_first_statement_of_type() {
        let mut model = Model::new();
        model.append(Statement::life("A", ["foo"]));
        model.append(Statement::text_size(12.0));
        model.append(Statement::text_size(15.0));

        let found = model.first_statement_of_type(Keyword::TextSize).unwrap();
        assert_eq!(found.text_size, Some(12.0));
        assert!(model.first_statement_of_type(Keyword::Full).is_none());
    }

    #[test]
    fn test_referenced_lifeline_counts_match_constructors() {
        assert_eq!(
            Statement::full("A", "B", ["x"]).referenced_lifelines.len(),
            Keyword::Full.referenced_lifeline_count()
        );
        assert_eq!(
            Statement::dash("A", "B", ["x"]).referenced_lifelines.len(),
            Keyword::Dash.referenced_lifeline_count()
        );
        assert_eq!(
            Statement::self_call("A", ["x"]).referenced_lifelines.len(),
            Keyword::SelfCall.referenced_lifeline_count()
        );
        assert_eq!(
            Statement::stop("A").referenced_lifelines.len(),
            Keyword::Stop.referenced_lifeline_count()
        );
        assert_eq!(Statement::show_letters(false).referenced_lifelines.len(), 0);
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Keyword::SelfCall.to_string(), "self");
        assert_eq!(Keyword::ShowLetters.to_string(), "showletters");
    }
}
