/// Numeric text formatting.
///
/// Renders integers in any base from 2 to 36, floats in the `b`, `e`, `E`,
/// `f`, `g` and `G` formats, and complex numbers as `(re±imi)`. Also holds the
/// [`FormatOptions`](format::FormatOptions) used by the string conversion.
pub mod format;
/// Numeric text lexer.
///
/// Defines the `logos` token set shared by every literal parser. Anything the
/// lexer does not recognize is a syntax error.
pub mod lexer;
/// Numeric text parsing.
///
/// Parses integer, float and complex literals for a given target width,
/// reporting syntax and range failures separately.
pub mod parse;
