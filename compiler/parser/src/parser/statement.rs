//! Parses sentences: the statement catalog and each statement's grammar.

use crate::parser::context::ParserContext;
use crate::tokenizer::Token;
use kuin_ast::{ClassMember, IfdefMode, Stmt, Visibility};
use kuin_errors::{ParserError, Result};

impl ParserContext<'_> {
    /// Dispatches on the current token to one of the statement/definition parsers. Callers
    /// must have already checked `is_sentence_start()`.
    pub(crate) fn parse_sentence(&mut self) -> Result<Stmt> {
        match self.token.token {
            Token::If => self.parse_if(),
            Token::Switch => self.parse_switch(),
            Token::While => self.parse_while(),
            Token::For => self.parse_for(),
            Token::Foreach => self.parse_foreach(),
            Token::Try => self.parse_try(),
            Token::Ifdef => self.parse_ifdef(),
            Token::Block => self.parse_block_stmt(),
            Token::Do => self.parse_do(),
            Token::Import => self.parse_import(),
            Token::Break => self.parse_break(),
            Token::Continue => self.parse_continue(),
            Token::Return => self.parse_return(),
            Token::Assert => self.parse_assert(),
            Token::Throw => self.parse_throw(),
            Token::Func => self.parse_func(),
            Token::Var => self.parse_var(),
            Token::Const => self.parse_const(),
            Token::Alias => self.parse_alias(),
            Token::Class => self.parse_class(),
            Token::Enum => self.parse_enum(),
            _ => Err(ParserError::unexpected(&self.token.token, "a statement", self.token.span).into()),
        }
    }

    /// A block body: sentences up to (not including) the closing `end`.
    fn parse_body(&mut self) -> Result<Vec<Stmt>> {
        let mut body = Vec::new();
        while self.is_sentence_start() {
            body.push(self.parse_sentence()?);
        }
        Ok(body)
    }

    fn parse_if(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let cond = self.parse_assign_expr()?;
        self.expect(&Token::RParen)?;
        let mut clauses = vec![(Some(cond), self.parse_body()?)];
        let mut saw_else = false;
        loop {
            if self.eat(&Token::Elif) {
                if saw_else {
                    return Err(ParserError::elif_after_else(self.prev_token.span).into());
                }
                self.expect(&Token::LParen)?;
                let cond = self.parse_assign_expr()?;
                self.expect(&Token::RParen)?;
                clauses.push((Some(cond), self.parse_body()?));
            } else if self.eat(&Token::Else) {
                saw_else = true;
                clauses.push((None, self.parse_body()?));
            } else {
                break;
            }
        }
        self.expect(&Token::End)?;
        self.expect(&Token::If)?;
        Ok(Stmt::If { clauses, block_name })
    }

    fn parse_switch(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let target = self.parse_assign_expr()?;
        self.expect(&Token::RParen)?;
        let mut cases = Vec::new();
        let mut saw_default = false;
        loop {
            if self.eat(&Token::Case) {
                if saw_default {
                    return Err(ParserError::switch_default_not_last(self.prev_token.span).into());
                }
                let values = self.parse_value_list()?;
                cases.push((Some(values), self.parse_body()?));
            } else if self.eat(&Token::Default) {
                saw_default = true;
                cases.push((None, self.parse_body()?));
            } else {
                break;
            }
        }
        self.expect(&Token::End)?;
        self.expect(&Token::Switch)?;
        Ok(Stmt::Switch { target, cases, block_name })
    }

    fn parse_while(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let cond = self.parse_assign_expr()?;
        let skip = if self.eat(&Token::Comma) { Some(self.parse_assign_expr()?) } else { None };
        self.expect(&Token::RParen)?;
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::While)?;
        Ok(Stmt::While { cond, skip, body, block_name })
    }

    fn parse_for(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let start = self.parse_assign_expr()?;
        self.expect(&Token::Comma)?;
        let end = self.parse_assign_expr()?;
        let step = if self.eat(&Token::Comma) { Some(self.parse_assign_expr()?) } else { None };
        self.expect(&Token::RParen)?;
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::For)?;
        Ok(Stmt::For { start, end, step, body, block_name })
    }

    fn parse_foreach(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let items = self.parse_assign_expr()?;
        self.expect(&Token::RParen)?;
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::Foreach)?;
        Ok(Stmt::Foreach { items, body, block_name })
    }

    fn parse_try(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let ignore = if self.check(&Token::RParen) { None } else { Some(self.parse_value_list()?) };
        self.expect(&Token::RParen)?;
        let body = self.parse_body()?;
        let (catch_values, catch_body) = if self.eat(&Token::Catch) {
            (Some(self.parse_value_list()?), self.parse_body()?)
        } else {
            (None, Vec::new())
        };
        let finally_body = if self.eat(&Token::Finally) { self.parse_body()? } else { Vec::new() };
        self.expect(&Token::End)?;
        self.expect(&Token::Try)?;
        Ok(Stmt::Try { ignore, body, catch_values, catch_body, finally_body, block_name })
    }

    fn parse_ifdef(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        self.expect(&Token::LParen)?;
        let mode = if self.eat(&Token::Release) {
            IfdefMode::Release
        } else if self.eat(&Token::Debug) {
            IfdefMode::Debug
        } else {
            return self.unexpected_one_of(&["release", "debug"]);
        };
        self.expect(&Token::RParen)?;
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::Ifdef)?;
        Ok(Stmt::Ifdef { mode, body, block_name })
    }

    fn parse_block_stmt(&mut self) -> Result<Stmt> {
        self.bump();
        let block_name = self.eat_block_name_opt();
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::Block)?;
        Ok(Stmt::Block { body, block_name })
    }

    fn parse_do(&mut self) -> Result<Stmt> {
        self.bump();
        Ok(Stmt::Do(self.parse_assign_expr()?))
    }

    fn parse_import(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.parse_source_name()?;
        Ok(Stmt::Import(name))
    }

    fn parse_break(&mut self) -> Result<Stmt> {
        self.bump();
        Ok(Stmt::Break(self.eat_block_name_opt()))
    }

    fn parse_continue(&mut self) -> Result<Stmt> {
        self.bump();
        Ok(Stmt::Continue(self.eat_block_name_opt()))
    }

    fn parse_return(&mut self) -> Result<Stmt> {
        self.bump();
        let value = if self.looks_like_expr_start() { Some(self.parse_assign_expr()?) } else { None };
        Ok(Stmt::Return(value))
    }

    fn parse_assert(&mut self) -> Result<Stmt> {
        self.bump();
        Ok(Stmt::Assert(self.parse_assign_expr()?))
    }

    /// `throw code[, message]`. The message is syntactically optional.
    fn parse_throw(&mut self) -> Result<Stmt> {
        self.bump();
        let code = self.parse_assign_expr()?;
        let message = if self.eat(&Token::Comma) { Some(self.parse_assign_expr()?) } else { None };
        Ok(Stmt::Throw { code, message })
    }

    fn parse_func(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        let params = self.parse_paren_comma_list(|p| {
            let name = p.expect_ident_symbol()?;
            p.expect(&Token::Colon)?;
            let ty = p.parse_type()?;
            Ok((name, ty))
        })?;
        let ret = if self.eat(&Token::Colon) { Some(self.parse_type()?) } else { None };
        let body = self.parse_body()?;
        self.expect(&Token::End)?;
        self.expect(&Token::Func)?;
        Ok(Stmt::Func { name, params, ret, body })
    }

    fn parse_var(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        self.expect(&Token::Colon)?;
        let ty = self.parse_type()?;
        let init = if self.eat(&Token::Assign) { Some(self.parse_assign_expr()?) } else { None };
        Ok(Stmt::Var { name, ty, init })
    }

    fn parse_const(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        self.expect(&Token::Colon)?;
        let ty = self.parse_type()?;
        self.expect(&Token::Assign)?;
        let init = self.parse_assign_expr()?;
        Ok(Stmt::Const { name, ty, init })
    }

    fn parse_alias(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        self.expect(&Token::Colon)?;
        let ty = self.parse_type()?;
        Ok(Stmt::Alias { name, ty })
    }

    fn parse_class(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        let parent = if self.eat(&Token::Colon) { Some(self.parse_class_name()?) } else { None };
        let mut members = Vec::new();
        while matches!(self.token.token, Token::Star | Token::Plus | Token::Minus)
            || matches!(self.token.token, Token::Func | Token::Var | Token::Const | Token::Alias | Token::Class | Token::Enum)
        {
            members.push(self.parse_class_member()?);
        }
        self.expect(&Token::End)?;
        self.expect(&Token::Class)?;
        Ok(Stmt::Class { name, parent, members })
    }

    /// One class member line: `['+'|'-'] ['*'] definition`. The override marker must
    /// follow the visibility marker, never precede it.
    fn parse_class_member(&mut self) -> Result<ClassMember> {
        if self.check(&Token::Star) {
            return Err(ParserError::invalid_override_marker(self.token.span).into());
        }
        let visibility = if self.eat(&Token::Plus) {
            Visibility::Protected
        } else if self.eat(&Token::Minus) {
            Visibility::Private
        } else {
            Visibility::Public
        };
        let is_override = self.eat(&Token::Star);
        let def = Box::new(self.parse_sentence()?);
        Ok(ClassMember { visibility, is_override, def })
    }

    /// `enum NAME member1 [:: N] member2 … end enum`: a running-counter algorithm,
    /// starting at 0.
    fn parse_enum(&mut self) -> Result<Stmt> {
        self.bump();
        let name = self.expect_ident_symbol()?;
        let mut members = Vec::new();
        let mut counter = 0i64;
        while let Token::Ident(_) = self.token.token {
            let member = self.expect_ident_symbol()?;
            let value = if self.eat(&Token::Assign) {
                let n = self.expect_int_literal()?;
                counter = n + 1;
                n
            } else {
                let n = counter;
                counter += 1;
                n
            };
            members.push((member, value));
        }
        self.expect(&Token::End)?;
        self.expect(&Token::Enum)?;
        Ok(Stmt::Enum { name, members })
    }

    /// An explicit enum-reset value is always a bare (unsigned) integer literal in practice;
    /// reusing the general expression parser and requiring the result collapse to an `Int`
    /// literal keeps this path as narrow as the grammar calls for.
    fn expect_int_literal(&mut self) -> Result<i64> {
        let expr = self.parse_unary_expr()?;
        match expr {
            kuin_ast::Expr::Literal(kuin_ast::Literal::Int(n)) => Ok(n),
            other => Err(ParserError::new(format!("expected an integer literal, found {other}"), self.prev_token.span).into()),
        }
    }

    fn unexpected_one_of<T>(&mut self, expected: &[&str]) -> Result<T> {
        Err(ParserError::unexpected(&self.token.token, expected.join(", "), self.token.span).into())
    }
}
