use colored::Colorize;
use kuin_span::Span;
use std::fmt;

/// An ordinary parse failure: the input did not match any grammar alternative at some
/// point. Carries the location and a human-readable summary of what was expected.
#[derive(Clone, Debug)]
pub struct ParserError {
    pub span: Span,
    pub message: String,
}

impl ParserError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParserError { span, message: message.into() }
    }

    pub fn unexpected(found: impl fmt::Display, expected: impl fmt::Display, span: Span) -> Self {
        Self::new(format!("unexpected token '{found}', expected one of: {expected}"), span)
    }

    pub fn unexpected_eof(span: Span) -> Self {
        Self::new("unexpected end of input", span)
    }

    pub fn trailing_input(found: impl fmt::Display, span: Span) -> Self {
        Self::new(format!("expected end of input, found '{found}'"), span)
    }

    pub fn invalid_escape(escape: char, span: Span) -> Self {
        Self::new(format!("'{escape}' is not a valid escape character"), span)
    }

    pub fn could_not_lex(remaining: impl fmt::Display, span: Span) -> Self {
        Self::new(format!("could not lex the next token: '{remaining}'"), span)
    }

    pub fn invalid_override_marker(span: Span) -> Self {
        Self::new("the override marker '*' must follow the visibility marker, not precede it", span)
    }

    pub fn switch_default_not_last(span: Span) -> Self {
        Self::new("the 'default' case of a switch must be its last case", span)
    }

    pub fn elif_after_else(span: Span) -> Self {
        Self::new("'elif' cannot follow 'else'", span)
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]: {}", "Error".red().bold(), self.span, self.message)
    }
}

impl std::error::Error for ParserError {}
