use crate::tokenizer::{SpannedToken, Token};
use kuin_errors::{Handler, ParserError, Result};
use kuin_span::{Span, Symbol};
use std::mem;

/// Drives the token stream for the recursive-descent grammar in `parser::{type_, expression,
/// statement, file}`: a reversed token buffer for cheap `.pop()`s, a one-token lookahead
/// (`token`/`prev_token`), and `bump`/`check`/`eat`/`expect` primitives every other parser
/// module is built on.
pub(crate) struct ParserContext<'a> {
    pub(crate) handler: &'a Handler,
    /// The original source text, needed only by `statement::parse_import`'s raw
    /// `SourceName` scan (not expressible as an ordinary token).
    pub(crate) source: &'a str,
    tokens: Vec<SpannedToken>,
    pub(crate) token: SpannedToken,
    pub(crate) prev_token: SpannedToken,
}

impl<'a> ParserContext<'a> {
    pub(crate) fn new(handler: &'a Handler, source: &'a str, mut tokens: Vec<SpannedToken>) -> Self {
        tokens.reverse();
        let token = SpannedToken::dummy();
        let mut ctx = ParserContext { handler, source, tokens, prev_token: token.clone(), token };
        ctx.bump();
        ctx
    }

    pub(crate) fn bump(&mut self) {
        if let Token::Eof = self.prev_token.token {
            panic!("attempted to bump the parser past EOF");
        }
        let next = self.tokens.pop().unwrap_or_else(|| SpannedToken { token: Token::Eof, span: self.token.span });
        self.prev_token = mem::replace(&mut self.token, next);
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        &self.token.token == token
    }

    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    pub(crate) fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|t| self.check(t)).then(|| self.bump()).is_some()
    }

    pub(crate) fn expect(&mut self, token: &Token) -> Result<Span> {
        if self.eat(token) { Ok(self.prev_token.span) } else { self.unexpected(token) }
    }

    pub(crate) fn expect_any(&mut self, tokens: &[Token]) -> Result<Span> {
        if self.eat_any(tokens) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(tokens.iter().map(|t| format!("'{t}'")).collect::<Vec<_>>().join(", "))
        }
    }

    fn unexpected<T>(&self, expected: impl std::fmt::Display) -> Result<T> {
        if self.check(&Token::Eof) {
            Err(ParserError::unexpected_eof(self.token.span).into())
        } else {
            Err(ParserError::unexpected(&self.token.token, expected, self.token.span).into())
        }
    }

    pub(crate) fn look_ahead<R>(&self, dist: usize, looker: impl FnOnce(&SpannedToken) -> R) -> R {
        if dist == 0 {
            return looker(&self.token);
        }
        let eof = SpannedToken { token: Token::Eof, span: Span::dummy() };
        match self.tokens.len().checked_sub(dist) {
            Some(idx) => looker(self.tokens.get(idx).unwrap_or(&eof)),
            None => looker(&eof),
        }
    }

    /// Eats an `Ident` token and returns its `Symbol`, or errors. Used for definition names
    /// (`func`/`var`/`const`/`alias`/`class`/`enum` and their members), which the grammar
    /// never qualifies with `.`/`#`/`@`.
    pub(crate) fn expect_ident_symbol(&mut self) -> Result<Symbol> {
        if let Token::Ident(sym) = self.token.token {
            self.bump();
            Ok(sym)
        } else {
            self.unexpected("an identifier")
        }
    }

    /// A block's optional name: a bare, unqualified identifier directly after the block
    /// keyword, before its `(`-delimited header (if any).
    pub(crate) fn eat_block_name_opt(&mut self) -> Option<Symbol> {
        if let Token::Ident(sym) = self.token.token {
            self.bump();
            Some(sym)
        } else {
            None
        }
    }

    /// True if the current token can start an `Expr` — used to decide, without backtracking,
    /// whether an optional `ValueList` (e.g. after `catch`, or `return`'s operand) is present,
    /// since no `Sentence` ever starts with any of these token kinds.
    pub(crate) fn looks_like_expr_start(&self) -> bool {
        matches!(
            self.token.token,
            Token::Int(_)
                | Token::Real(_)
                | Token::Str(_)
                | Token::Char(_)
                | Token::True
                | Token::False
                | Token::Ident(_)
                | Token::LParen
                | Token::Plus
                | Token::Minus
                | Token::Bang
                | Token::AtNew
        )
    }

    /// True if the current token can start a statement.
    pub(crate) fn is_sentence_start(&self) -> bool {
        matches!(
            self.token.token,
            Token::If
                | Token::Switch
                | Token::While
                | Token::For
                | Token::Foreach
                | Token::Try
                | Token::Ifdef
                | Token::Block
                | Token::Do
                | Token::Import
                | Token::Break
                | Token::Continue
                | Token::Return
                | Token::Assert
                | Token::Throw
                | Token::Func
                | Token::Var
                | Token::Const
                | Token::Alias
                | Token::Class
                | Token::Enum
        )
    }

    /// Parses a list of `T` delimited by `open`/`close` and separated by `sep`, in the
    /// teacher's `parse_list` shape.
    pub(crate) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Token,
        mut inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.expect(&open)?;
        let mut items = Vec::new();
        if !self.check(&close) {
            loop {
                items.push(inner(self)?);
                if !self.eat(&sep) {
                    break;
                }
            }
        }
        self.expect(&close)?;
        Ok(items)
    }

    pub(crate) fn parse_paren_comma_list<T>(&mut self, inner: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.parse_list(Token::LParen, Token::RParen, Token::Comma, inner)
    }

    /// Scans the raw `SourceName` argument of an `import` statement directly out of the
    /// original source text, then resynchronizes the token cursor past it. Needed because
    /// a source name (any run of non-whitespace characters) isn't a token the lexer can
    /// produce context-free.
    pub(crate) fn parse_source_name(&mut self) -> Result<Symbol> {
        let start = self.token.span.lo.to_usize();
        if start >= self.source.len() {
            return Err(ParserError::unexpected_eof(self.token.span).into());
        }
        let end = self.source[start..]
            .char_indices()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, _)| start + i)
            .unwrap_or(self.source.len());
        if end == start {
            return self.unexpected("a module source name");
        }
        let text = &self.source[start..end];
        let sym = Symbol::intern(text);
        while self.token.span.lo.to_usize() < end && !self.check(&Token::Eof) {
            self.bump();
        }
        Ok(sym)
    }
}
