//! The error taxonomy for the Kuin parser: ordinary [`ParserError`]s that the grammar's
//! alternation can route around, and [`FatalParserError`]s (malformed numeric literals)
//! that cannot.

mod fatal;
mod handler;
mod parser_error;

pub use fatal::FatalParserError;
pub use handler::Handler;
pub use parser_error::ParserError;

/// Either taxonomy member, the error type every parsing operation returns.
#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Fatal(#[from] FatalParserError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use kuin_span::{BytePos, Span};

    #[test]
    fn fatal_error_does_not_need_a_handler() {
        let err: Error = FatalParserError::ReservedRadix { radix: 10, span: Span::new(BytePos(0), BytePos(5)) }.into();
        assert!(matches!(err, Error::Fatal(_)));
    }

    #[test]
    fn handler_collects_first_error() {
        let handler = Handler::new();
        handler.emit_err(ParserError::unexpected_eof(Span::dummy()));
        assert!(handler.has_errors());
        assert!(handler.with(()).is_err());
    }
}
