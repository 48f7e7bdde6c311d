use std::{fmt::Display, marker::PhantomData};

use crate::{
    accessor::{defaults::Defaults, element::Element},
    convert::core::TRACE_TARGET,
    error::ConvertError,
    outcome::ConversionOutcome,
    value::core::Value,
};

/// Marker for how an accessor serializes a missing or invalid value.
pub trait Nullability {
    /// `true` if a missing or invalid value is written as `null`.
    const NULLABLE: bool;
}

/// Missing or invalid values are written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nullable;

/// Values are always written out, falling back to the zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotNullable;

impl Nullability for Nullable {
    const NULLABLE: bool = true;
}

impl Nullability for NotNullable {
    const NULLABLE: bool = false;
}

/// A typed slot holding the result of converting a dynamic value.
///
/// An accessor remembers both halves of a [`ConversionOutcome`]: it can be
/// *present* (a value was materialized) and *invalid* (the value is not an
/// exact conversion) at the same time.
///
/// # Example
/// ```
/// use exactcast::{
///     accessor::element::NullInt8,
///     error::ErrorKind,
///     value::core::Value,
/// };
///
/// let accessor = NullInt8::from_value(&Value::Int64(200));
/// assert!(accessor.present());
/// assert!(!accessor.valid());
/// assert_eq!(accessor.v(), -56);
/// assert_eq!(accessor.err().map(|e| e.kind()), Some(ErrorKind::Convert));
/// ```
#[derive(Debug, Clone)]
pub struct Accessor<T: Element, N: Nullability> {
    value:       Option<T>,
    error:       Option<ConvertError>,
    nullability: PhantomData<N>,
}

impl<T: Element, N: Nullability> Accessor<T, N> {
    /// An accessor with no value and no error.
    #[must_use]
    pub const fn absent() -> Self {
        Self { value:       None,
               error:       None,
               nullability: PhantomData, }
    }

    /// An accessor holding `value`, valid.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value:       Some(value),
               error:       None,
               nullability: PhantomData, }
    }

    /// Stores both halves of a conversion outcome.
    #[must_use]
    pub fn from_outcome(outcome: ConversionOutcome<T>) -> Self {
        Self { value:       outcome.value,
               error:       outcome.error,
               nullability: PhantomData, }
    }

    /// Converts `value` to `T`.
    ///
    /// A best-effort value and its error are both kept.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::from_outcome(T::convert(value))
    }

    /// Converts `value` to `T`, substituting `default` when the conversion
    /// reports an error.
    ///
    /// The error is kept, so the accessor stays invalid.
    ///
    /// # Example
    /// ```
    /// use exactcast::{accessor::element::NullUint8, value::core::Value};
    ///
    /// let accessor = NullUint8::from_value_or(&Value::from("nope"), 7);
    /// assert_eq!(accessor.v(), 7);
    /// assert!(!accessor.valid());
    ///
    /// let accessor = NullUint8::from_value_or(&Value::from("9"), 7);
    /// assert_eq!(accessor.v(), 9);
    /// assert!(accessor.valid());
    /// ```
    #[must_use]
    pub fn from_value_or(value: &Value, default: T) -> Self {
        Self::from_value_with(value, Defaults::one(default))
    }

    /// Converts `value` to `T` with an optional default.
    #[must_use]
    pub fn from_value_with(value: &Value, defaults: Defaults<T>) -> Self {
        let outcome = T::convert(value);

        match (defaults.into_inner(), outcome.error) {
            (Some(default), Some(error)) => {
                tracing::trace!(target: TRACE_TARGET, ?default, %error,
                                "substituting default for failed conversion");
                Self { value:       Some(default),
                       error:       Some(error),
                       nullability: PhantomData, }
            },
            (_, error) => Self { value: outcome.value,
                                 error,
                                 nullability: PhantomData },
        }
    }

    /// Converts `value` to `T` with a list of defaults.
    ///
    /// Two or more defaults are always a `DefaultValue` error and leave the
    /// accessor without a value, whatever the conversion would have done.
    ///
    /// # Example
    /// ```
    /// use exactcast::{accessor::element::Int32, error::ErrorKind, value::core::Value};
    ///
    /// let accessor = Int32::from_value_with_defaults(&Value::Int8(1), &[2, 3]);
    /// assert!(!accessor.present());
    /// assert_eq!(accessor.err().map(|e| e.kind()), Some(ErrorKind::DefaultValue));
    /// ```
    #[must_use]
    pub fn from_value_with_defaults(value: &Value, defaults: &[T]) -> Self {
        match Defaults::try_from(defaults) {
            Ok(defaults) => Self::from_value_with(value, defaults),
            Err(error) => Self::failed(error),
        }
    }

    /// Returns `true` if a value was materialized, exact or not.
    #[must_use]
    pub const fn present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no error was recorded.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the value, or `T`'s zero value when absent.
    #[must_use]
    pub fn v(&self) -> T {
        self.value.clone().unwrap_or_default()
    }

    /// Returns the value, if one was materialized.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Stores `value` and clears any error.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.error = None;
    }

    /// Returns the recorded error.
    #[must_use]
    pub const fn err(&self) -> Option<&ConvertError> {
        self.error.as_ref()
    }

    /// Hands back both halves as a [`ConversionOutcome`].
    #[must_use]
    pub fn into_outcome(self) -> ConversionOutcome<T> {
        ConversionOutcome { value: self.value,
                            error: self.error, }
    }

    /// Returns the value only if it is present and valid.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        if self.error.is_some() { None } else { self.value }
    }

    /// An accessor holding only an error.
    pub(crate) const fn failed(error: ConvertError) -> Self {
        Self { value:       None,
               error:       Some(error),
               nullability: PhantomData, }
    }
}

impl<T: Element, N: Nullability> Default for Accessor<T, N> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: Element, N: Nullability> From<T> for Accessor<T, N> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Element, N: Nullability> PartialEq for Accessor<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.error == other.error
    }
}

impl<T: Element, N: Nullability> Display for Accessor<T, N> {
    /// Writes the value as the string conversion would, or `null` when
    /// absent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value.to_value()),
            None => write!(f, "null"),
        }
    }
}
