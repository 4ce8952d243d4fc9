use crate::{Error, ParserError};
use std::cell::RefCell;

/// Accumulates ordinary [`ParserError`]s raised while parsing so that a single call to
/// `parse_program` can, in principle, surface more than one diagnostic. A
/// [`crate::FatalParserError`] never passes through the handler: it is returned directly
/// by the `?` operator at its call site, since it is non-recoverable.
#[derive(Default)]
pub struct Handler {
    errors: RefCell<Vec<ParserError>>,
}

impl Handler {
    pub fn new() -> Self {
        Handler::default()
    }

    /// Records an error without aborting the current parse.
    pub fn emit_err(&self, error: ParserError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    pub fn err_count(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Converts accumulated errors into a single [`Error`] (the first one raised) for
    /// callers that only want a pass/fail signal, or `Ok(value)` if none were recorded.
    pub fn with<T>(&self, value: T) -> Result<T, Error> {
        let mut errors = self.errors.borrow_mut();
        if errors.is_empty() { Ok(value) } else { Err(Error::Parser(errors.remove(0))) }
    }

    pub fn take_errors(&self) -> Vec<ParserError> {
        std::mem::take(&mut *self.errors.borrow_mut())
    }
}
