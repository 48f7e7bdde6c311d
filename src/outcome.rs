use crate::error::ConvertError;

/// The result of one conversion: a value, an error, both, or neither.
///
/// Unlike `Result`, both halves can be present at once. An unsafe conversion
/// still produces a best-effort value (wrapped, truncated or rounded) next to
/// its error, so callers must not assume `error == None` exactly when
/// `value == None`.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_int,
///     error::ErrorKind,
///     value::{
///         core::Value,
///         shape::{NumericShape, Width},
///     },
/// };
///
/// let outcome = to_int(&Value::Int64(200), NumericShape::SignedInt(Width::W8));
/// assert_eq!(outcome.value(), Some(&-56));
/// assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::Convert));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome<T> {
    /// The materialized value, possibly best-effort.
    pub value: Option<T>,
    /// Why the value is not exact, if it is not.
    pub error: Option<ConvertError>,
}

impl<T> ConversionOutcome<T> {
    /// An exact conversion.
    #[must_use]
    pub const fn exact(value: T) -> Self {
        Self { value: Some(value),
               error: None, }
    }

    /// A conversion that produced `value` but lost information.
    #[must_use]
    pub const fn lossy(value: T, error: ConvertError) -> Self {
        Self { value: Some(value),
               error: Some(error), }
    }

    /// A conversion that produced nothing.
    #[must_use]
    pub const fn failed(error: ConvertError) -> Self {
        Self { value: None,
               error: Some(error), }
    }

    /// No value and no error, e.g. a decoded `null`.
    #[must_use]
    pub const fn absent() -> Self {
        Self { value: None,
               error: None, }
    }

    /// Builds an exact or lossy outcome depending on `safe`.
    ///
    /// The error is only built when it is needed.
    pub fn checked(value: T, safe: bool, error: impl FnOnce() -> ConvertError) -> Self {
        if safe { Self::exact(value) } else { Self::lossy(value, error()) }
    }

    /// Returns the value, if one was materialized.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the error, if the conversion was not exact.
    #[must_use]
    pub const fn error(&self) -> Option<&ConvertError> {
        self.error.as_ref()
    }

    /// Returns `true` if a value is present and no error occurred.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.value.is_some() && self.error.is_none()
    }

    /// Transforms the value, keeping the error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ConversionOutcome<U> {
        ConversionOutcome { value: self.value.map(f),
                            error: self.error, }
    }

    /// Collapses the outcome into a `Result`, discarding any best-effort
    /// value.
    ///
    /// # Errors
    /// Returns the outcome's error if there is one, or
    /// `ConvertError::InvalidArgument` if there is neither value nor error.
    pub fn into_result(self) -> Result<T, ConvertError> {
        match (self.value, self.error) {
            (_, Some(error)) => Err(error),
            (Some(value), None) => Ok(value),
            (None, None) => Err(ConvertError::invalid_argument("no value was materialized")),
        }
    }
}

impl<T> From<Result<T, ConvertError>> for ConversionOutcome<T> {
    fn from(result: Result<T, ConvertError>) -> Self {
        match result {
            Ok(value) => Self::exact(value),
            Err(error) => Self::failed(error),
        }
    }
}
