//! The char-level lexer. [`Token::eat`] scans exactly one token (or a skippable run of
//! whitespace or a comment) from the front of its input, so `tokenizer::tokenize` can
//! drive it in a loop.

use crate::tokenizer::{numeric, Token, KEYWORD_TOKENS};
use kuin_errors::{ParserError, Result};
use kuin_span::{BytePos, Span, Symbol};
use std::iter::Peekable;
use std::str::Chars;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Translates one escape character: `\n \r \\ \' \"` map to their named character,
/// anything else passes through as itself (the backslash is dropped).
fn translate_escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        other => other,
    }
}

/// Scans a `{ ... }` comment starting at `s[0]` (`{`), returning its total byte length
/// including both braces. Nestable, and aware of string/char literals so a `}` inside one
/// doesn't close the comment early.
fn comment_len(s: &str, lit_start: BytePos) -> Result<usize> {
    let mut depth: u32 = 1;
    let mut iter = s.char_indices().peekable();
    iter.next(); // the opening '{'

    while let Some((i, c)) = iter.next() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            '"' => skip_quoted(&mut iter, '"'),
            '\'' => skip_quoted(&mut iter, '\''),
            _ => {}
        }
    }
    let pos = lit_start + BytePos::from_usize(s.len());
    Err(ParserError::new("comment is not closed before end of input", Span::new(lit_start, pos)).into())
}

/// Advances past a quoted run up to (and including) its closing `quote`, treating `\X` as a
/// single escaped unit so an escaped quote can't close the literal early.
fn skip_quoted(iter: &mut std::iter::Peekable<std::str::CharIndices>, quote: char) {
    while let Some((_, c)) = iter.next() {
        if c == '\\' {
            iter.next();
        } else if c == quote {
            break;
        }
    }
}

impl Token {
    /// Scans one token (or a comment/whitespace run) from the front of `input`, whose
    /// absolute source position is `lit_start` (needed for numeric-literal and comment error
    /// spans). `prev_was_ident_adjacent` is true when the byte immediately before `input`
    /// was the last byte of an `Ident` token with no intervening whitespace — the signal
    /// this lexer uses to disambiguate a bare `#` (the `Enum#Member` qualifier separator)
    /// from a hex-literal prefix.
    pub(crate) fn eat(input: &str, lit_start: BytePos, prev_was_ident_adjacent: bool) -> Result<(usize, Token)> {
        let mut chars: Peekable<Chars> = input.chars().peekable();
        let c = *chars.peek().expect("tokenizer never calls eat() on empty input");

        if c.is_ascii_whitespace() {
            return Ok((c.len_utf8(), Token::WhiteSpace));
        }

        if c == '{' {
            let len = comment_len(input, lit_start)?;
            return Ok((len, Token::Comment(input[..len].to_owned())));
        }

        if c == '"' {
            return Self::eat_string(input);
        }

        if c == '\'' {
            return Self::eat_char(input);
        }

        if c.is_ascii_digit() || (c == '#' && !prev_was_ident_adjacent) {
            if let Some((len, value)) = numeric::scan(input, lit_start)? {
                let token = match value {
                    numeric::NumValue::Int(n) => Token::Int(n),
                    numeric::NumValue::Real(x) => Token::Real(x),
                };
                return Ok((len, token));
            }
            // Not actually shaped like a number (e.g. `2#`, `#fff`); fall through so a bare
            // digit-led run still gets a diagnostic below rather than silently matching `#`.
            if c != '#' {
                return Err(ParserError::could_not_lex(&input[..c.len_utf8()], Span::new(lit_start, lit_start + BytePos(1))).into());
            }
        }

        if is_ident_start(c) {
            let ident: String = chars.clone().take_while(|c| is_ident_continue(*c)).collect();
            let len = ident.len();
            if let Some((_, tok)) = KEYWORD_TOKENS.iter().find(|(kw, _)| *kw == ident) {
                return Ok((len, tok.clone()));
            }
            return Ok((len, Token::Ident(Symbol::intern(&ident))));
        }

        macro_rules! single {
            ($tok:expr) => {
                Ok((c.len_utf8(), $tok))
            };
        }
        macro_rules! followed_by {
            ($next:expr, $then:expr, $else_:expr) => {{
                let mut rest = chars.clone();
                rest.next();
                if rest.next() == Some($next) { Ok((2, $then)) } else { Ok((1, $else_)) }
            }};
        }

        match c {
            '(' => single!(Token::LParen),
            ')' => single!(Token::RParen),
            '[' => single!(Token::LBracket),
            ']' => single!(Token::RBracket),
            ',' => single!(Token::Comma),
            '.' => single!(Token::Dot),
            '#' => single!(Token::Hash),
            '~' => single!(Token::Tilde),
            '&' => single!(Token::Amp),
            '|' => single!(Token::Pipe),
            '!' => single!(Token::Bang),
            '$' => single!(Token::Dollar),
            '+' => single!(Token::Plus),
            '-' => single!(Token::Minus),
            '*' => single!(Token::Star),
            '/' => single!(Token::Slash),
            '%' => single!(Token::Percent),
            '=' => single!(Token::Eq),
            ':' => {
                let mut rest = chars.clone();
                rest.next();
                match rest.next() {
                    Some(':') => Ok((2, Token::Assign)),
                    Some('+') => Ok((2, Token::AddAssign)),
                    Some('-') => Ok((2, Token::SubAssign)),
                    Some('*') => Ok((2, Token::MulAssign)),
                    Some('/') => Ok((2, Token::DivAssign)),
                    Some('%') => Ok((2, Token::ModAssign)),
                    Some('^') => Ok((2, Token::PowAssign)),
                    Some('~') => Ok((2, Token::CatAssign)),
                    _ => Ok((1, Token::Colon)),
                }
            }
            '<' => {
                let mut rest = chars.clone();
                rest.next();
                match rest.next() {
                    Some('>') => Ok((2, Token::Neq)),
                    Some('=') => Ok((2, Token::Le)),
                    _ => Ok((1, Token::Lt)),
                }
            }
            '>' => followed_by!('=', Token::Ge, Token::Gt),
            '?' => {
                let mut rest = chars.clone();
                rest.next();
                if rest.next() == Some('(') {
                    Ok((2, Token::QuestionParen))
                } else {
                    Err(ParserError::new(
                        "'?' must be immediately followed by '(' to form a ternary expression",
                        Span::new(lit_start, lit_start + BytePos(1)),
                    )
                    .into())
                }
            }
            '@' => {
                let mut rest = input[1..].chars();
                let word: String = rest.by_ref().take_while(|c| is_ident_continue(*c)).collect();
                let boundary_ok = rest.next().map(|c| !is_ident_continue(c)).unwrap_or(true);
                match word.as_str() {
                    "new" if boundary_ok => Ok((4, Token::AtNew)),
                    "is" if boundary_ok => Ok((3, Token::AtIs)),
                    "nis" if boundary_ok => Ok((4, Token::AtNis)),
                    "to" if boundary_ok => Ok((3, Token::AtTo)),
                    _ => Ok((1, Token::At)),
                }
            }
            other => Err(ParserError::could_not_lex(other, Span::new(lit_start, lit_start + BytePos::from_usize(other.len_utf8()))).into()),
        }
    }

    fn eat_string(input: &str) -> Result<(usize, Token)> {
        let mut iter = input.char_indices();
        iter.next(); // opening quote
        let mut text = String::new();
        while let Some((i, c)) = iter.next() {
            match c {
                '"' => return Ok((i + 1, Token::Str(text))),
                '\\' => match iter.next() {
                    Some((_, esc)) => text.push(translate_escape(esc)),
                    None => break,
                },
                _ => text.push(c),
            }
        }
        Err(ParserError::new("string literal is not closed before end of input", Span::dummy()).into())
    }

    fn eat_char(input: &str) -> Result<(usize, Token)> {
        let mut iter = input.char_indices();
        iter.next(); // opening quote
        let value = match iter.next() {
            Some((_, '\\')) => match iter.next() {
                Some((_, esc)) => translate_escape(esc),
                None => return Err(ParserError::new("char literal is not closed before end of input", Span::dummy()).into()),
            },
            Some((_, c)) => c,
            None => return Err(ParserError::new("char literal is not closed before end of input", Span::dummy()).into()),
        };
        match iter.next() {
            Some((i, '\'')) => Ok((i + 1, Token::Char(value))),
            _ => Err(ParserError::new("char literal must contain exactly one character", Span::dummy()).into()),
        }
    }
}
