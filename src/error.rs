/// Conversion errors.
///
/// Defines the error values produced by the dispatcher, the accessor and the
/// persistence boundary. Every error is recoverable: conversions never panic,
/// they hand back a best-effort value together with one of these errors.
pub mod convert_error;
/// Literal errors.
///
/// Contains the errors raised while lexing or parsing numeric text, before the
/// dispatcher maps them onto a [`ConvertError`].
pub mod literal_error;

pub use convert_error::{ConvertError, ErrorKind};
pub use literal_error::LiteralError;
