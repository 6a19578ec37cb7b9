//! Labelled source spans attached to diagnostics.

use crate::span::Span;

/// A message pinned to a span of the script.
///
/// A diagnostic has one primary label marking the offending text. Secondary
/// labels point at related text, such as the earlier declaration of a
/// duplicated lifeline.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a label marking the main location of a problem.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a label giving additional context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(5..6), "not a single letter");

        assert_eq!(label.span(), Span::new(5..6));
        assert_eq!(label.message(), "not a single letter");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..10), "first declared here");

        assert!(label.is_secondary());
        assert_eq!(label.span().len(), 10);
    }
}
