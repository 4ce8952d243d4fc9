//! The expression grammar: a precedence cascade from loosest (assignment, level 1) down
//! to tightest (atoms, level 13). Each level is one method that either matches its own
//! operator(s) or falls through to the next-tighter level, one `parse_*_expression` per
//! precedence rung.

use crate::parser::context::ParserContext;
use crate::tokenizer::Token;
use kuin_ast::{ops, Expr, Literal, ValueList};
use kuin_errors::{ParserError, Result};

/// Level 1 (loosest): `:: :+ :- :* :/ :% :^ :~`, right-associative.
const ASSIGN_OPS: &[(Token, &str)] = &[
    (Token::Assign, ops::ASSIGN),
    (Token::AddAssign, ops::ASSIGN_ADD),
    (Token::SubAssign, ops::ASSIGN_SUB),
    (Token::MulAssign, ops::ASSIGN_MUL),
    (Token::DivAssign, ops::ASSIGN_DIV),
    (Token::ModAssign, ops::ASSIGN_MOD),
    (Token::PowAssign, ops::ASSIGN_POW),
    (Token::CatAssign, ops::ASSIGN_CAT),
];

/// Level 3: `& |`, left-associative.
const BITOR_OPS: &[(Token, &str)] = &[(Token::Amp, ops::AND), (Token::Pipe, ops::OR)];

/// Level 4: `= <> < > <= >=`, left-associative.
const CMP_OPS: &[(Token, &str)] = &[
    (Token::Eq, ops::EQ),
    (Token::Neq, ops::NEQ),
    (Token::Le, ops::LE),
    (Token::Ge, ops::GE),
    (Token::Lt, ops::LT),
    (Token::Gt, ops::GT),
];

/// Level 5: `~` (array concatenation), left-associative.
const CONCAT_OPS: &[(Token, &str)] = &[(Token::Tilde, ops::CONCAT)];

/// Level 6: `+ -`, left-associative.
const ADD_OPS: &[(Token, &str)] = &[(Token::Plus, ops::ADD), (Token::Minus, ops::SUB)];

/// Level 7: `* / %`, left-associative.
const MUL_OPS: &[(Token, &str)] = &[(Token::Star, ops::MUL), (Token::Slash, ops::DIV), (Token::Percent, ops::MOD)];

/// Level 9: `@is @nis`, left-associative; right operand is a `ClassName`.
const ISNIS_OPS: &[(Token, &str)] = &[(Token::AtIs, ops::IS), (Token::AtNis, ops::NIS)];

impl ParserContext<'_> {
    /// The general expression entry point, used by every caller that needs a full `Expr`
    /// (statement headers, initializers, array sizes, call/index arguments, …): level 1,
    /// the loosest-binding rung of the cascade.
    pub(crate) fn parse_assign_expr(&mut self) -> Result<Expr> {
        let left = self.parse_ternary_expr()?;
        match self.eat_op(ASSIGN_OPS) {
            // Right-associative: the right-hand side re-enters at this same level.
            Some(op) => Ok(Expr::binary(op, left, self.parse_assign_expr()?)),
            None => Ok(left),
        }
    }

    /// Level 2: `cond ?(if_true, if_false)`. `?(` is lexed as one token with no whitespace
    /// between `?` and `(`, so no adjacency check is needed here.
    fn parse_ternary_expr(&mut self) -> Result<Expr> {
        let cond = self.parse_bitor_expr()?;
        if self.eat(&Token::QuestionParen) {
            let if_true = self.parse_assign_expr()?;
            self.expect(&Token::Comma)?;
            let if_false = self.parse_assign_expr()?;
            self.expect(&Token::RParen)?;
            return Ok(Expr::ternary(cond, if_true, if_false));
        }
        Ok(cond)
    }

    fn parse_bitor_expr(&mut self) -> Result<Expr> {
        self.parse_left_assoc(BITOR_OPS, Self::parse_cmp_expr)
    }

    fn parse_cmp_expr(&mut self) -> Result<Expr> {
        self.parse_left_assoc(CMP_OPS, Self::parse_concat_expr)
    }

    fn parse_concat_expr(&mut self) -> Result<Expr> {
        self.parse_left_assoc(CONCAT_OPS, Self::parse_additive_expr)
    }

    fn parse_additive_expr(&mut self) -> Result<Expr> {
        self.parse_left_assoc(ADD_OPS, Self::parse_multiplicative_expr)
    }

    fn parse_multiplicative_expr(&mut self) -> Result<Expr> {
        self.parse_left_assoc(MUL_OPS, Self::parse_cast_expr)
    }

    /// Level 8: `$`, whose right-hand side is a [`kuin_ast::Type`], not an `Expr` —
    /// pulled out of `parse_left_assoc`'s shape for that reason.
    fn parse_cast_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_isnis_expr()?;
        while self.eat(&Token::Dollar) {
            let ty = self.parse_type()?;
            left = Expr::Cast { expr: Box::new(left), ty };
        }
        Ok(left)
    }

    /// Level 9: `@is`/`@nis`, whose right-hand side is syntactically a `ClassName`, not a
    /// general qualified name or `Type`.
    fn parse_isnis_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary_expr()?;
        while let Some(op) = self.eat_op(ISNIS_OPS) {
            let class_name = self.parse_class_name()?;
            left = Expr::binary(op, left, Expr::Ref(class_name));
        }
        Ok(left)
    }

    /// Level 10: unary `+ - !`. Numeric literals are threaded in here rather than at the
    /// atom level: `-3` is a single signed `Literal`, never `Op(-, 3)`. A bare (unsigned)
    /// numeric token is handled here too, since the lexer never
    /// folds a leading sign into the literal itself — see `tokenizer::numeric::scan`'s
    /// doc comment on `allow_sign`.
    pub(crate) fn parse_unary_expr(&mut self) -> Result<Expr> {
        if matches!(self.token.token, Token::Int(_) | Token::Real(_)) {
            return self.parse_number_literal(false);
        }
        if matches!(self.token.token, Token::Plus | Token::Minus) {
            let negative = matches!(self.token.token, Token::Minus);
            if matches!(self.look_ahead(1, |t| t.token.clone()), Token::Int(_) | Token::Real(_)) {
                self.bump();
                return self.parse_number_literal(negative);
            }
            let op = if negative { ops::SUB } else { ops::ADD };
            self.bump();
            return Ok(Expr::unary(op, self.parse_unary_expr()?));
        }
        if self.eat(&Token::Bang) {
            return Ok(Expr::unary(ops::NOT, self.parse_unary_expr()?));
        }
        self.parse_new_expr()
    }

    fn parse_number_literal(&mut self, negative: bool) -> Result<Expr> {
        match self.token.token.clone() {
            Token::Int(n) => {
                self.bump();
                Ok(Expr::Literal(Literal::Int(if negative { -n } else { n })))
            }
            Token::Real(x) => {
                self.bump();
                Ok(Expr::Literal(Literal::Real(if negative { -x } else { x })))
            }
            other => unreachable!("parse_number_literal called on non-numeric token {other:?}"),
        }
    }

    /// Level 11: `@new Type`.
    fn parse_new_expr(&mut self) -> Result<Expr> {
        if self.eat(&Token::AtNew) {
            let ty = self.parse_type()?;
            return Ok(Expr::New(ty));
        }
        self.parse_postfix_expr()
    }

    /// Level 12: function call and array index (`Call(func: Symbol, ..)`,
    /// `Index(array: Symbol, ..)`), which only ever apply directly to a qualified name, not
    /// to an arbitrary expression, so this level special-cases `Ident`-led input rather
    /// than looping postfix operators over whatever level 13 returns.
    fn parse_postfix_expr(&mut self) -> Result<Expr> {
        if matches!(self.token.token, Token::Ident(_)) {
            let name = self.parse_qualified_name(true)?;
            if self.check(&Token::LParen) {
                let args = self.parse_paren_comma_list(|p| p.parse_assign_expr())?;
                return Ok(Expr::Call { func: name, args });
            }
            if self.eat(&Token::LBracket) {
                let index = self.parse_assign_expr()?;
                self.expect(&Token::RBracket)?;
                return Ok(Expr::Index { array: name, index: Box::new(index) });
            }
            return Ok(Expr::Ref(name));
        }
        self.parse_atom_expr()
    }

    /// Level 13 (tightest): literal, nested `(Expr)`. Bare numeric literals never reach
    /// here — level 10 claims them first.
    fn parse_atom_expr(&mut self) -> Result<Expr> {
        match self.token.token.clone() {
            Token::Str(s) => {
                self.bump();
                Ok(Expr::Literal(Literal::Str(s)))
            }
            Token::Char(c) => {
                self.bump();
                Ok(Expr::Literal(Literal::Char(c)))
            }
            Token::True => {
                self.bump();
                Ok(Expr::Literal(Literal::Bool(true)))
            }
            Token::False => {
                self.bump();
                Ok(Expr::Literal(Literal::Bool(false)))
            }
            Token::LParen => {
                self.bump();
                let inner = self.parse_assign_expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            _ => Err(ParserError::unexpected(&self.token.token, "an expression", self.token.span).into()),
        }
    }

    /// A `switch`/`try` header's comma-separated list of single values or inclusive
    /// `lo @to hi` ranges.
    pub(crate) fn parse_value_list(&mut self) -> Result<ValueList> {
        let mut items = Vec::new();
        loop {
            let lo = self.parse_assign_expr()?;
            let hi = if self.eat(&Token::AtTo) { Some(self.parse_assign_expr()?) } else { None };
            items.push((lo, hi));
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        Ok(items)
    }

    fn eat_op(&mut self, table: &[(Token, &'static str)]) -> Option<&'static str> {
        table.iter().find(|(tok, _)| self.check(tok)).map(|(_, sym)| {
            self.bump();
            *sym
        })
    }

    /// Builds a left-leaning binary tree out of a run of same-level operators: `a*b*c`
    /// becomes `Op(*, Op(*, a, b), c)`.
    fn parse_left_assoc(&mut self, table: &[(Token, &'static str)], next: fn(&mut Self) -> Result<Expr>) -> Result<Expr> {
        let mut left = next(self)?;
        while let Some(op) = self.eat_op(table) {
            left = Expr::binary(op, left, next(self)?);
        }
        Ok(left)
    }
}
