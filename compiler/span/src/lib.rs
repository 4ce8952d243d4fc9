//! Source positions and symbol interning shared by the Kuin AST and parser.

pub mod span;
pub use span::{BytePos, Pos, Span};

pub mod symbol;
pub use symbol::{create_session_if_not_set_then, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_round_trips() {
        create_session_if_not_set_then(|| {
            let a = Symbol::intern("Foo.bar");
            let b = Symbol::intern("Foo.bar");
            assert_eq!(a, b);
            assert_eq!(a.as_str(), "Foo.bar");
        });
    }

    #[test]
    fn distinct_strings_intern_distinctly() {
        create_session_if_not_set_then(|| {
            let a = Symbol::intern("alpha");
            let b = Symbol::intern("beta");
            assert_ne!(a, b);
        });
    }

    #[test]
    fn span_combines_to_covering_range() {
        let a = Span::new(BytePos(2), BytePos(5));
        let b = Span::new(BytePos(4), BytePos(9));
        let combined = a + b;
        assert_eq!(combined, Span::new(BytePos(2), BytePos(9)));
    }
}
