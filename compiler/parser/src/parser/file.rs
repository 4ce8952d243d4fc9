//! The crate's two public entry points: `parse_expression` and `parse_program`. Both
//! open an interning session, tokenize, drive a [`ParserContext`] through one top-level
//! rule, and reject trailing input.

use crate::parser::context::ParserContext;
use crate::tokenize;
use crate::tokenizer::Token;
use kuin_ast::{Expr, Stmt};
use kuin_errors::{Handler, ParserError, Result};
use kuin_span::create_session_if_not_set_then;

impl ParserContext<'_> {
    /// Zero or more sentences, stopping at the first token that cannot start one — the
    /// caller (`parse_program`) is responsible for treating anything left over as trailing
    /// input.
    pub(crate) fn parse_sentences(&mut self) -> Result<Vec<Stmt>> {
        let mut sentences = Vec::new();
        while self.is_sentence_start() {
            sentences.push(self.parse_sentence()?);
        }
        Ok(sentences)
    }
}

/// Parses exactly one expression, consuming all input.
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_expression(text: &str) -> Result<Expr> {
    create_session_if_not_set_then(|| {
        let handler = Handler::new();
        let tokens = tokenize(text)?;
        let mut ctx = ParserContext::new(&handler, text, tokens);
        let expr = ctx.parse_assign_expr()?;
        if !ctx.check(&Token::Eof) {
            return Err(ParserError::trailing_input(&ctx.token.token, ctx.token.span).into());
        }
        handler.with(expr)
    })
}

/// Parses a sequence of zero or more sentences, consuming all input.
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_program(text: &str) -> Result<Vec<Stmt>> {
    create_session_if_not_set_then(|| {
        let handler = Handler::new();
        let tokens = tokenize(text)?;
        let mut ctx = ParserContext::new(&handler, text, tokens);
        let stmts = ctx.parse_sentences()?;
        if !ctx.check(&Token::Eof) {
            return Err(ParserError::trailing_input(&ctx.token.token, ctx.token.span).into());
        }
        handler.with(stmts)
    })
}
