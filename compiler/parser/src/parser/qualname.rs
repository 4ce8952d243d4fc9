//! Builds the qualified-name `Symbol`s: `ClassName`, `FunctionName`, `VariableName`,
//! `EnumName`, `ConstantName`. All five share one grammar shape — an
//! optional `module@` prefix followed by a run of identifiers joined by `.` and/or `#` — so
//! this module flattens them into the same builder rather than five near-duplicate parsers,
//! and lets the caller decide (via `allow_hash`) whether a trailing `#member` is admissible
//! in its position.

use crate::parser::context::ParserContext;
use crate::tokenizer::Token;
use kuin_errors::Result;
use kuin_span::Symbol;

impl ParserContext<'_> {
    /// Parses the general qualified-name grammar. `allow_hash` controls whether `#` joins
    /// are consumed: `true` for value/type references (`VariableName`/`ConstantName`/
    /// `EnumName`-as-`Type`), `false` for a bare `ClassName` (a class's parent, or the
    /// right-hand side of `@is`/`@nis`, never contains `#`).
    pub(crate) fn parse_qualified_name(&mut self, allow_hash: bool) -> Result<Symbol> {
        let mut text = String::new();

        // Optional `module@` prefix: an `Ident` immediately followed by a bare `At`.
        if matches!(self.token.token, Token::Ident(_)) && matches!(self.look_ahead(1, |t| t.token.clone()), Token::At) {
            let module = self.expect_ident_symbol()?;
            self.expect(&Token::At)?;
            text.push_str(module.as_str());
            text.push('@');
        }

        let first = self.expect_ident_symbol()?;
        text.push_str(first.as_str());

        loop {
            let joiner = match self.token.token {
                Token::Dot => '.',
                Token::Hash if allow_hash => '#',
                _ => break,
            };
            // Only join if an identifier actually follows; otherwise leave the punctuation
            // for whoever parses next (defensive — every call site here is always followed
            // by an identifier in valid input, but this avoids eating a stray `.`/`#`).
            if !matches!(self.look_ahead(1, |t| t.token.clone()), Token::Ident(_)) {
                break;
            }
            self.bump();
            let part = self.expect_ident_symbol()?;
            text.push(joiner);
            text.push_str(part.as_str());
        }

        Ok(Symbol::intern(&text))
    }

    /// A `ClassName` strictly: no `#` joins. Used for a class's declared parent and the
    /// right-hand side of `@is`/`@nis`.
    pub(crate) fn parse_class_name(&mut self) -> Result<Symbol> {
        self.parse_qualified_name(false)
    }
}
