use kuin_span::Span;

/// A numeric literal that matched the shape of a number but is invalid on semantic
/// grounds no alternative could route around: an out-of-range or reserved radix, or a
/// digit outside the chosen radix's alphabet. Unlike [`ParserError`](crate::ParserError)
/// this is never swallowed by the surrounding grammar's alternation.
#[derive(Clone, Debug, thiserror::Error)]
pub enum FatalParserError {
    #[error("radix {radix} is out of range at {span}; radix must be between 2 and 36")]
    RadixOutOfRange { radix: u32, span: Span },

    #[error("radix {radix} at {span} must use its dedicated decimal or hexadecimal form")]
    ReservedRadix { radix: u32, span: Span },

    #[error("digit '{digit}' at {span} is not valid in radix {radix}")]
    DigitOutOfRange { digit: char, radix: u32, span: Span },
}

impl FatalParserError {
    pub fn span(&self) -> Span {
        match self {
            FatalParserError::RadixOutOfRange { span, .. }
            | FatalParserError::ReservedRadix { span, .. }
            | FatalParserError::DigitOutOfRange { span, .. } => *span,
        }
    }
}
