use thiserror::Error;

use crate::value::shape::NumericShape;

/// The coarse category of a [`ConvertError`].
///
/// Callers that only care about *why* a conversion failed (rather than the
/// full message) compare against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value is not exactly representable, or not parseable, in the target
    /// shape.
    Convert,
    /// The input is structurally malformed, e.g. a partially matched literal.
    UnexpectedValue,
    /// The caller misused the API, e.g. passed a nil source or an invalid
    /// base.
    InvalidArgument,
    /// More than one default value was supplied.
    DefaultValue,
}

/// Represents all errors that can occur while converting a value.
///
/// A conversion error does not mean "no value": the dispatcher still returns
/// a best-effort result next to most of these. See
/// [`ConversionOutcome`](crate::outcome::ConversionOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value cannot be represented exactly in the target shape.
    #[error("cannot convert {from} to {to}: {details}")]
    Convert {
        /// Shape of the source value.
        from:    NumericShape,
        /// Requested target shape.
        to:      NumericShape,
        /// What went wrong.
        details: String,
    },
    /// The input matched only part of the expected structure.
    #[error("unexpected value: {details}")]
    UnexpectedValue {
        /// What was unexpected about the value.
        details: String,
    },
    /// The caller passed something the engine cannot work with.
    #[error("invalid argument: {details}")]
    InvalidArgument {
        /// Why the argument was rejected.
        details: String,
    },
    /// Two or more defaults were supplied where at most one is allowed.
    #[error("ambiguous default: {count} default values supplied, at most one is allowed")]
    DefaultValue {
        /// How many defaults the caller passed.
        count: usize,
    },
}

impl ConvertError {
    /// Builds a [`ConvertError::Convert`].
    ///
    /// # Example
    /// ```
    /// use exactcast::{
    ///     error::{ConvertError, ErrorKind},
    ///     value::shape::{NumericShape, Width},
    /// };
    ///
    /// let err = ConvertError::convert(NumericShape::SignedInt(Width::W64),
    ///                                 NumericShape::SignedInt(Width::W8),
    ///                                 "200 is out of range");
    /// assert_eq!(err.kind(), ErrorKind::Convert);
    /// assert_eq!(err.to_string(), "cannot convert int64 to int8: 200 is out of range");
    /// ```
    pub fn convert(from: NumericShape, to: NumericShape, details: impl Into<String>) -> Self {
        Self::Convert { from,
                        to,
                        details: details.into() }
    }

    /// Builds a [`ConvertError::UnexpectedValue`].
    pub fn unexpected(details: impl Into<String>) -> Self {
        Self::UnexpectedValue { details: details.into() }
    }

    /// Builds a [`ConvertError::InvalidArgument`].
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument { details: details.into() }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Convert { .. } => ErrorKind::Convert,
            Self::UnexpectedValue { .. } => ErrorKind::UnexpectedValue,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::DefaultValue { .. } => ErrorKind::DefaultValue,
        }
    }

    /// Returns `true` if this error belongs to `kind`.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}
