//! Parses type expressions.

use crate::parser::context::ParserContext;
use crate::tokenizer::{Token, PRIMITIVE_TYPE_NAMES};
use kuin_ast::{ContainerKind, Type};
use kuin_errors::Result;

impl ParserContext<'_> {
    /// A full type expression: zero or more leading `[]`/`[N]` array dimensions around a
    /// base type.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        let mut sizes = Vec::new();
        while self.check(&Token::LBracket) {
            self.bump();
            let size = if self.check(&Token::RBracket) { None } else { Some(self.parse_assign_expr()?) };
            self.expect(&Token::RBracket)?;
            sizes.push(size);
        }
        let base = self.parse_type_base()?;
        if sizes.is_empty() { Ok(base) } else { Ok(Type::Array { base: Box::new(base), sizes }) }
    }

    fn parse_type_base(&mut self) -> Result<Type> {
        if self.check(&Token::Func) {
            self.bump();
            let args = self.parse_paren_comma_list(|p| p.parse_type())?;
            self.expect(&Token::Colon)?;
            let ret = self.parse_type()?;
            return Ok(Type::Func { args, ret: Box::new(ret) });
        }

        if let Token::Ident(sym) = self.token.token {
            let text = sym.as_str();
            if PRIMITIVE_TYPE_NAMES.contains(&text) {
                self.bump();
                return Ok(Type::Primitive(sym));
            }
            let kind = match text {
                "list" => Some(ContainerKind::List),
                "stack" => Some(ContainerKind::Stack),
                "queue" => Some(ContainerKind::Queue),
                _ => None,
            };
            if let Some(kind) = kind {
                self.bump();
                self.expect(&Token::LParen)?;
                let item = self.parse_type()?;
                self.expect(&Token::RParen)?;
                return Ok(Type::Container { kind, item: Box::new(item) });
            }
            if text == "dict" {
                self.bump();
                self.expect(&Token::LParen)?;
                let key = self.parse_type()?;
                self.expect(&Token::Comma)?;
                let value = self.parse_type()?;
                self.expect(&Token::RParen)?;
                return Ok(Type::Dict { key: Box::new(key), value: Box::new(value) });
            }

            // Anything else identifier-shaped is a `NamedType` (enum or class name — the
            // grammar doesn't distinguish them).
            let name = self.parse_qualified_name(true)?;
            return Ok(Type::Named(name));
        }

        self.unexpected_type()
    }

    fn unexpected_type<T>(&mut self) -> Result<T> {
        Err(kuin_errors::ParserError::unexpected(&self.token.token, "a type", self.token.span).into())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::file::parse_expression;
    use kuin_ast::{ContainerKind, Type};
    use kuin_span::create_session_if_not_set_then;

    fn parse_type(s: &str) -> Type {
        create_session_if_not_set_then(|| {
            let e = parse_expression(&format!("@new {s}")).unwrap();
            match e {
                kuin_ast::Expr::New(ty) => ty,
                other => panic!("expected New, got {other:?}"),
            }
        })
    }

    #[test]
    fn primitive() {
        assert!(matches!(parse_type("int"), Type::Primitive(s) if s.as_str() == "int"));
    }

    #[test]
    fn named() {
        assert!(matches!(parse_type("MyClass"), Type::Named(s) if s.as_str() == "MyClass"));
    }

    #[test]
    fn array_of_int_with_size() {
        match parse_type("[5]int") {
            Type::Array { base, sizes } => {
                assert!(matches!(*base, Type::Primitive(_)));
                assert_eq!(sizes.len(), 1);
                assert!(sizes[0].is_some());
            }
            other => panic!("expected Array, got {other:?}"),
        }
    }

    #[test]
    fn empty_bracket_dimension() {
        match parse_type("[]int") {
            Type::Array { sizes, .. } => assert_eq!(sizes, vec![None]),
            other => panic!("expected Array, got {other:?}"),
        }
    }

    #[test]
    fn list_container() {
        match parse_type("list(int)") {
            Type::Container { kind, item } => {
                assert_eq!(kind, ContainerKind::List);
                assert!(matches!(*item, Type::Primitive(_)));
            }
            other => panic!("expected Container, got {other:?}"),
        }
    }

    #[test]
    fn dict_type() {
        match parse_type("dict(int, char)") {
            Type::Dict { key, value } => {
                assert!(matches!(*key, Type::Primitive(_)));
                assert!(matches!(*value, Type::Primitive(_)));
            }
            other => panic!("expected Dict, got {other:?}"),
        }
    }

    #[test]
    fn func_type() {
        match parse_type("func(int, int): bool") {
            Type::Func { args, ret } => {
                assert_eq!(args.len(), 2);
                assert!(matches!(*ret, Type::Primitive(_)));
            }
            other => panic!("expected Func, got {other:?}"),
        }
    }
}
