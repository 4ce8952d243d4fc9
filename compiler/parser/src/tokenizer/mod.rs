//! Converts Kuin source text into a flat token stream.

mod lexer;
mod numeric;
mod token;

pub use token::{SpannedToken, Token, KEYWORD_TOKENS, PRIMITIVE_TYPE_NAMES};

use kuin_errors::Result;
use kuin_span::{BytePos, Span};
use std::iter;

/// Tokenizes `input` in one pass, filtering out whitespace and comments. The only context
/// a later token's scan depends on is whether it immediately follows an `Ident` token with
/// no gap (see `lexer::Token::eat`'s doc comment on the `#` hex-vs-qualifier ambiguity).
#[tracing::instrument(level = "trace", skip(input))]
pub(crate) fn tokenize(input: &str) -> Result<Vec<SpannedToken>> {
    tokenize_iter(input).collect()
}

fn tokenize_iter(input: &str) -> impl '_ + Iterator<Item = Result<SpannedToken>> {
    let mut index = 0usize;
    let mut prev_ident_end: Option<usize> = None;
    iter::from_fn(move || {
        while input.len() > index {
            let prev_was_ident_adjacent = prev_ident_end == Some(index);
            let lit_start = BytePos::from_usize(index);
            let (len, token) = match Token::eat(&input[index..], lit_start, prev_was_ident_adjacent) {
                Ok(t) => t,
                Err(e) => return Some(Err(e)),
            };

            let span = Span::new(lit_start, lit_start + BytePos::from_usize(len));
            prev_ident_end = matches!(token, Token::Ident(_)).then_some(index + len);
            index += len;

            match token {
                Token::WhiteSpace | Token::Comment(_) => continue,
                _ => return Some(Ok(SpannedToken { token, span })),
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_strings(input: &str) -> Vec<String> {
        kuin_span::create_session_if_not_set_then(|| tokenize(input).unwrap().iter().map(|t| t.token.to_string()).collect())
    }

    #[test]
    fn skips_whitespace_and_comments() {
        assert_eq!(token_strings("a { this is a comment } b"), vec!["a", "b"]);
    }

    #[test]
    fn nested_comment_with_braces() {
        assert_eq!(token_strings("x { outer { inner } still outer } y"), vec!["x", "y"]);
    }

    #[test]
    fn comment_containing_string_with_brace() {
        assert_eq!(token_strings(r#"x { a "} not a close" b } y"#), vec!["x", "y"]);
    }

    #[test]
    fn string_and_char_literals() {
        kuin_span::create_session_if_not_set_then(|| {
            let tokens = tokenize(r#""hi\n" 'a' '\''"#).unwrap();
            assert!(matches!(&tokens[0].token, Token::Str(s) if s == "hi\n"));
            assert!(matches!(tokens[1].token, Token::Char('a')));
            assert!(matches!(tokens[2].token, Token::Char('\'')));
        });
    }

    #[test]
    fn char_literal_escapes() {
        kuin_span::create_session_if_not_set_then(|| {
            let tokens = tokenize(r#"'\\' '\n'"#).unwrap();
            assert!(matches!(tokens[0].token, Token::Char('\\')));
            assert!(matches!(tokens[1].token, Token::Char('\n')));
        });
    }

    #[test]
    fn qualified_name_punctuation() {
        assert_eq!(token_strings("A.B#C@D"), vec!["A", ".", "B", "#", "C", "@", "D"]);
    }

    #[test]
    fn hex_literal_not_mistaken_for_hash_after_operator() {
        assert_eq!(token_strings("x + #FF"), vec!["x", "+", "255"]);
    }

    #[test]
    fn hash_after_identifier_is_qualifier_not_hex() {
        assert_eq!(token_strings("Foo#Bar"), vec!["Foo", "#", "Bar"]);
    }

    #[test]
    fn ternary_opener_requires_adjacency() {
        assert_eq!(token_strings("a ?(b, c)"), vec!["a", "?(", "b", ",", "c", ")"]);
        assert!(tokenize("a ? (b, c)").is_err());
    }

    #[test]
    fn keywords_and_idents() {
        assert_eq!(token_strings("if else end trueish"), vec!["if", "else", "end", "trueish"]);
    }
}
