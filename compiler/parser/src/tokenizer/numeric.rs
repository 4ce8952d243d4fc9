//! The numeric-literal state machine, kept separate from the rest of the lexer so its
//! three mantissa forms (decimal, hex-prefix, explicit-radix) and exponent handling can
//! be tested in isolation. [`scan`] is the entry point the general tokenizer calls
//! whenever it sees a leading digit or `#`; it returns `Ok(None)` when the text at this
//! position isn't shaped like a number at all (an ordinary, backtrackable non-match —
//! e.g. `#` not followed by any hex digit), `Ok(Some(..))` on success, and `Err` only for
//! the two fatal cases: an out-of-range/reserved radix, or a digit outside the chosen
//! radix's alphabet.

use kuin_errors::FatalParserError;
use kuin_span::{BytePos, Span};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumValue {
    Int(i64),
    Real(f64),
}

/// Digit value of `c` in the `0-9A-Z` alphabet (36 symbols), or `None` if `c` isn't one.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Scans a maximal run of characters satisfying `pred`, returning its length in bytes
/// (every accepted char is ASCII, so byte length == char count).
fn scan_run(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.chars().take_while(|c| pred(*c)).count()
}

/// Validates every character of `digits` is a legal digit of `radix`, returning the
/// fatal error for the first one that isn't.
fn validate_radix_digits(digits: &str, radix: u32, base_offset: usize, lit_start: BytePos) -> Result<(), FatalParserError> {
    for (i, c) in digits.char_indices() {
        let v = digit_value(c).expect("scan_run only admits 0-9A-Z");
        if v >= radix {
            let pos = lit_start + BytePos::from_usize(base_offset + i);
            return Err(FatalParserError::DigitOutOfRange { digit: c, radix, span: Span::new(pos, pos + BytePos(1)) });
        }
    }
    Ok(())
}

fn parse_in_radix(digits: &str, radix: u32) -> i64 {
    let mut acc: i64 = 0;
    for c in digits.chars() {
        let v = digit_value(c).unwrap() as i64;
        acc = acc * radix as i64 + v;
    }
    acc
}

/// Attempts to eat the `[1-9][0-9]?#` explicit-radix prefix at the start of `s`.
/// Returns `(radix, bytes consumed including the `#`)`.
fn try_radix_prefix(s: &str) -> Option<(u32, usize)> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() || bytes[0] == b'0' {
        return None;
    }
    let d1 = (bytes[0] - b'0') as u32;
    if bytes.len() >= 3 && bytes[1].is_ascii_digit() && bytes[2] == b'#' {
        let d2 = (bytes[1] - b'0') as u32;
        return Some((d1 * 10 + d2, 3));
    }
    if bytes.len() >= 2 && bytes[1] == b'#' {
        return Some((d1, 2));
    }
    None
}

/// Scans one numeric literal (mantissa plus an optional `e`-exponent) starting at byte
/// offset `offset` of `full`, where `lit_start` is `full`'s absolute position (for error
/// spans). `allow_sign` is true only when called recursively for an exponent body: a
/// leading sign is not part of a mantissa at the top call, but the exponent's own
/// recursive literal may carry one.
fn scan_inner(full: &str, offset: usize, lit_start: BytePos, allow_sign: bool) -> Result<Option<(usize, NumValue)>, FatalParserError> {
    let s = &full[offset..];
    let mut pos = 0usize;

    let mut negative = false;
    if allow_sign {
        if let Some(c) = s.chars().next() {
            if c == '+' || c == '-' {
                negative = c == '-';
                pos += 1;
            }
        }
    }

    let body = &s[pos..];

    let is_hex_form = body.starts_with('#');
    let is_explicit_radix_form = !is_hex_form && try_radix_prefix(body).is_some();

    let (radix, int_digits_start): (u32, usize) = if is_hex_form {
        (16, pos + 1)
    } else if let Some((radix, consumed)) = try_radix_prefix(body) {
        (radix, pos + consumed)
    } else if body.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        (10, pos)
    } else {
        return Ok(None);
    };

    // The three mantissa forms have distinct digit alphabets: hex-prefix is `[0-9A-F]`,
    // explicit-radix is the full `[0-9A-Z]` (validated against the actual radix below),
    // decimal is plain `[0-9]`.
    let digit_charset: fn(char) -> bool = if is_hex_form {
        |c| matches!(c, '0'..='9' | 'A'..='F')
    } else if is_explicit_radix_form {
        |c| matches!(c, '0'..='9' | 'A'..='Z')
    } else {
        |c| c.is_ascii_digit()
    };

    let int_len = scan_run(&s[int_digits_start..], digit_charset);
    if int_len == 0 {
        // Malformed: `2#`, bare `#` with no digits, etc. Non-fatal; caller's alternation
        // keeps looking elsewhere.
        return Ok(None);
    }
    let mut cursor = int_digits_start + int_len;
    let int_digits = &s[int_digits_start..cursor];

    if is_explicit_radix_form {
        if radix < 2 || radix > 36 {
            let pos_abs = lit_start + BytePos::from_usize(offset);
            return Err(FatalParserError::RadixOutOfRange {
                radix,
                span: Span::new(pos_abs, pos_abs + BytePos::from_usize(cursor)),
            });
        }
        if radix == 10 || radix == 16 {
            let pos_abs = lit_start + BytePos::from_usize(offset);
            return Err(FatalParserError::ReservedRadix {
                radix,
                span: Span::new(pos_abs, pos_abs + BytePos::from_usize(cursor)),
            });
        }
    }
    validate_radix_digits(int_digits, radix, offset + int_digits_start, lit_start)?;

    let mut frac_digits: Option<&str> = None;
    if s.as_bytes().get(cursor) == Some(&b'.') {
        let frac_start = cursor + 1;
        let frac_len = scan_run(&s[frac_start..], digit_charset);
        if frac_len > 0 {
            let digits = &s[frac_start..frac_start + frac_len];
            validate_radix_digits(digits, radix, offset + frac_start, lit_start)?;
            frac_digits = Some(digits);
            cursor = frac_start + frac_len;
        }
        // else: the lone `.` is left unconsumed, e.g. a following `@to`/method access.
    }

    let mut mantissa = parse_in_radix(int_digits, radix) as f64;
    let mut is_real = frac_digits.is_some();
    if let Some(frac) = frac_digits {
        mantissa += parse_in_radix(frac, radix) as f64 / (radix as f64).powi(frac.chars().count() as i32);
    }

    if s.as_bytes().get(cursor) == Some(&b'e') {
        match scan_inner(full, offset + cursor + 1, lit_start, true)? {
            Some((exp_len, exp_val)) => {
                let exp = match exp_val {
                    NumValue::Int(n) => n as f64,
                    NumValue::Real(x) => x,
                };
                mantissa *= (radix as f64).powf(exp);
                is_real = true;
                cursor += 1 + exp_len;
            }
            None => { /* `e` wasn't followed by a valid literal; leave it unconsumed. */ }
        }
    }

    if negative {
        mantissa = -mantissa;
    }

    let value = if is_real { NumValue::Real(mantissa) } else { NumValue::Int(mantissa as i64) };
    Ok(Some((pos + cursor, value)))
}

/// Scans a numeric literal at the start of `input`, whose absolute source position is
/// `lit_start`. No leading sign is considered part of the literal at this entry point —
/// `-3`/`+3` are folded into a signed literal by the expression parser's unary level
/// instead.
pub fn scan(input: &str, lit_start: BytePos) -> Result<Option<(usize, NumValue)>, FatalParserError> {
    scan_inner(input, 0, lit_start, false)
}
