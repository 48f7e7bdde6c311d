use logos::Logos;

use crate::error::LiteralError;

/// Represents a lexical token of numeric text.
///
/// Numeric literals are lexed before they are parsed so that every accepted
/// spelling is listed in one place. There is no whitespace token: any
/// character outside these patterns is a lexer error, which makes the
/// grammar strict.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// Decimal digits with optional `_` separators, such as `42` or `1_000`.
    /// A leading `0` followed by more digits is a legacy octal literal.
    #[regex(r"[0-9](_?[0-9])*")]
    Decimal,
    /// Hexadecimal integers such as `0xFF` or `0x_dead_beef`.
    #[regex(r"0[xX]_?[0-9a-fA-F](_?[0-9a-fA-F])*")]
    Hex,
    /// Octal integers such as `0o755`.
    #[regex(r"0[oO]_?[0-7](_?[0-7])*")]
    Octal,
    /// Binary integers such as `0b1010`.
    #[regex(r"0[bB]_?[01](_?[01])*")]
    Binary,
    /// Real literals such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Real,
    /// `inf`, `infinity` or `nan`, in any letter case.
    #[regex(r"[iI][nN][fF]([iI][nN][iI][tT][yY])?")]
    #[regex(r"[nN][aA][nN]")]
    Special,
}

impl Token {
    /// Returns `true` for the sign tokens.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// Splits numeric text into tokens together with the text they cover.
///
/// # Errors
/// Returns `LiteralError::Syntax` for the whole input as soon as a character
/// does not start any token.
///
/// # Example
/// ```
/// use exactcast::grammar::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-0x1F").unwrap();
/// assert_eq!(tokens, vec![(Token::Minus, "-"), (Token::Hex, "0x1F")]);
///
/// assert!(tokenize("12 34").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<(Token, &str)>, LiteralError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.slice()));
        } else {
            return Err(LiteralError::syntax(text));
        }
    }

    Ok(tokens)
}
