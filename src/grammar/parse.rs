use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{ConvertError, LiteralError},
    grammar::lexer::{Token, tokenize},
    outcome::ConversionOutcome,
    util::num::{int_max, int_min, uint_max},
    value::{
        complex::Complex128,
        shape::{NumericShape, Width},
    },
};

/// Matches `re±imi`, optionally wrapped in parentheses.
///
/// Anchored at both ends: text around a literal, as in `x3+4i` or `3+4i!`, is
/// not a complex number.
static COMPLEX_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\(?([+-]?\d+(?:\.\d+(?:e\+\d+)?)?)([+-]\d+(?:\.\d+(?:e\+\d+)?)?)i\)?$")
        .expect("complex literal pattern is valid")
});

/// A single signed numeric token.
struct Literal<'a> {
    sign:  Option<Token>,
    token: Token,
    text:  &'a str,
}

impl Literal<'_> {
    fn is_negative(&self) -> bool {
        self.sign == Some(Token::Minus)
    }
}

/// Lexes `text` and requires exactly one numeric token, optionally preceded
/// by one sign.
fn literal(text: &str) -> Result<Literal<'_>, LiteralError> {
    let tokens = tokenize(text)?;

    let (sign, (token, slice)) = match tokens.as_slice() {
        [single] => (None, *single),
        [(sign, _), rest] if sign.is_sign() => (Some(*sign), *rest),
        _ => return Err(LiteralError::syntax(text)),
    };

    if token.is_sign() {
        return Err(LiteralError::syntax(text));
    }

    Ok(Literal { sign,
                 token,
                 text: slice })
}

/// Reads the magnitude of an integer literal, honouring its radix prefix.
#[allow(clippy::cast_precision_loss)]
fn magnitude(literal: &Literal<'_>, text: &str) -> Result<u64, LiteralError> {
    let (radix, digits) = match literal.token {
        Token::Hex => (16, &literal.text[2..]),
        Token::Octal => (8, &literal.text[2..]),
        Token::Binary => (2, &literal.text[2..]),
        Token::Decimal if literal.text.len() > 1 && literal.text.starts_with('0') => {
            (8, &literal.text[1..])
        },
        Token::Decimal => (10, literal.text),
        _ => return Err(LiteralError::syntax(text)),
    };

    let digits: String = digits.chars().filter(|c| *c != '_').collect();

    u64::from_str_radix(&digits, radix).map_err(|e| match e.kind() {
                                           IntErrorKind::PosOverflow => {
                                               LiteralError::range(text, u64::MAX as f64)
                                           },
                                           _ => LiteralError::syntax(text),
                                       })
}

/// Parses a signed integer literal for an integer of `bits` width.
///
/// Accepts an optional sign followed by a decimal literal, a `0x`, `0o` or
/// `0b` prefixed literal, or a legacy octal literal with a leading `0`.
/// Single underscores may separate digits.
///
/// # Errors
/// - `LiteralError::Syntax` if the text is not an integer literal.
/// - `LiteralError::Range` if it does not fit `bits`; the best-effort value is
///   the nearest bound.
///
/// # Example
/// ```
/// use exactcast::{grammar::parse::parse_int, value::shape::Width};
///
/// assert_eq!(parse_int("-0x80", Width::W8).unwrap(), -128);
/// assert_eq!(parse_int("0755", Width::W64).unwrap(), 493);
/// assert_eq!(parse_int("1_000", Width::W16).unwrap(), 1000);
/// assert!(parse_int("128", Width::W8).is_err());
/// assert!(parse_int("1.5", Width::W64).is_err());
/// ```
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn parse_int(text: &str, bits: Width) -> Result<i64, LiteralError> {
    let literal = literal(text)?;
    let negative = literal.is_negative();

    let bound = |negative: bool| if negative { int_min(bits) } else { int_max(bits) };

    let magnitude = match magnitude(&literal, text) {
        Ok(m) => m,
        Err(LiteralError::Range { .. }) => {
            return Err(LiteralError::range(text, bound(negative) as f64));
        },
        Err(e) => return Err(e),
    };

    let limit = if negative { int_min(bits).unsigned_abs() } else { int_max(bits).unsigned_abs() };
    if magnitude > limit {
        return Err(LiteralError::range(text, bound(negative) as f64));
    }

    // `2^63` wraps to `i64::MIN`, which is its own negation.
    Ok(if negative { (magnitude as i64).wrapping_neg() } else { magnitude as i64 })
}

/// Parses an unsigned integer literal for an integer of `bits` width.
///
/// Same grammar as [`parse_int`] without the sign.
///
/// # Errors
/// - `LiteralError::Syntax` if the text is not an unsigned integer literal.
/// - `LiteralError::Range` if it does not fit `bits`.
///
/// # Example
/// ```
/// use exactcast::{grammar::parse::parse_uint, value::shape::Width};
///
/// assert_eq!(parse_uint("0b1111_1111", Width::W8).unwrap(), 255);
/// assert!(parse_uint("256", Width::W8).is_err());
/// assert!(parse_uint("+1", Width::W8).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn parse_uint(text: &str, bits: Width) -> Result<u64, LiteralError> {
    let literal = literal(text)?;
    if literal.sign.is_some() {
        return Err(LiteralError::syntax(text));
    }

    let magnitude = magnitude(&literal, text)?;
    if magnitude > uint_max(bits) {
        return Err(LiteralError::range(text, uint_max(bits) as f64));
    }

    Ok(magnitude)
}

/// Parses a float literal for a float of `bits` width.
///
/// Accepts decimal and scientific literals (`3.14`, `.5`, `1e10`) and the
/// special values `inf`, `infinity` and `nan` in any letter case, each with an
/// optional sign. At 32 bits the text is rounded to `f32` directly so that no
/// double rounding occurs.
///
/// # Errors
/// - `LiteralError::Syntax` if the text is not a float literal.
/// - `LiteralError::Range` if a finite literal overflows the width; the
///   best-effort value is the signed infinity.
///
/// # Example
/// ```
/// use exactcast::{grammar::parse::parse_float, value::shape::Width};
///
/// assert_eq!(parse_float("-2.5e3", Width::W64).unwrap(), -2500.0);
/// assert!(parse_float("-Inf", Width::W64).unwrap().is_infinite());
/// assert!(parse_float("1e39", Width::W32).is_err());
/// assert!(parse_float("1e39", Width::W64).is_ok());
/// ```
pub fn parse_float(text: &str, bits: Width) -> Result<f64, LiteralError> {
    let literal = literal(text)?;

    match literal.token {
        Token::Decimal if !literal.text.contains('_') => {},
        Token::Real | Token::Special => {},
        _ => return Err(LiteralError::syntax(text)),
    }

    let parsed = if bits.bits() <= 32 {
        text.parse::<f32>().map(f64::from).map_err(|_| LiteralError::syntax(text))?
    } else {
        text.parse::<f64>().map_err(|_| LiteralError::syntax(text))?
    };

    if parsed.is_infinite() && literal.token != Token::Special {
        return Err(LiteralError::range(text, parsed));
    }

    Ok(parsed)
}

/// Parses a complex literal such as `3+4i` or `(1.5-2.0e+3i)`.
///
/// The real part is an optionally signed decimal, the imaginary part is
/// required, must carry an explicit sign and ends in `i`. Exponents must be
/// written `e+N`. The match is case-insensitive and must cover the whole
/// input.
///
/// - No match: a `Convert` error and no value.
/// - A component that fails to parse at `bits`: an `UnexpectedValue` error,
///   with the components that did parse kept in the value.
///
/// # Example
/// ```
/// use exactcast::{
///     error::ErrorKind,
///     grammar::parse::parse_complex,
///     value::{complex::Complex128, shape::Width},
/// };
///
/// let outcome = parse_complex("(3+4i)", Width::W64);
/// assert_eq!(outcome.value(), Some(&Complex128::new(3.0, 4.0)));
/// assert!(outcome.is_exact());
///
/// let outcome = parse_complex("3+4j", Width::W64);
/// assert_eq!(outcome.value(), None);
/// assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::Convert));
/// ```
pub fn parse_complex(text: &str, bits: Width) -> ConversionOutcome<Complex128> {
    let Some(captures) = COMPLEX_LITERAL.captures(text) else {
        return ConversionOutcome::failed(ConvertError::convert(NumericShape::String,
                                                               NumericShape::Complex(bits),
                                                               format!("'{text}' is not a \
                                                                        complex literal")));
    };

    let real = parse_float(&captures[1], bits);
    let imaginary = parse_float(&captures[2], bits);

    match (real, imaginary) {
        (Ok(re), Ok(im)) => ConversionOutcome::exact(Complex128::new(re, im)),
        (real, imaginary) => {
            let details = [&real, &imaginary].into_iter()
                                             .find_map(|r| r.as_ref().err())
                                             .map(ToString::to_string)
                                             .unwrap_or_default();
            let partial = Complex128::new(best_effort(&real), best_effort(&imaginary));

            ConversionOutcome::lossy(partial, ConvertError::unexpected(details))
        },
    }
}

/// The value to keep for a component that did not parse cleanly.
fn best_effort(component: &Result<f64, LiteralError>) -> f64 {
    match component {
        Ok(v) => *v,
        Err(e) => e.best_effort().unwrap_or(0.0),
    }
}
