use crate::error::ConvertError;

/// At most one fallback value for an accessor.
///
/// The cardinality check happens when the defaults are built, so an
/// accessor constructor that takes `Defaults` can never see two of them.
///
/// # Example
/// ```
/// use exactcast::{accessor::defaults::Defaults, error::ErrorKind};
///
/// assert_eq!(Defaults::try_from(&[7][..]).unwrap().get(), Some(&7));
/// assert_eq!(Defaults::<i32>::try_from(&[][..]).unwrap().get(), None);
///
/// let err = Defaults::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DefaultValue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Defaults<T>(Option<T>);

impl<T> Defaults<T> {
    /// No default.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Exactly one default.
    #[must_use]
    pub const fn one(value: T) -> Self {
        Self(Some(value))
    }

    /// Returns the default, if there is one.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Consumes the defaults, returning the default if there is one.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T: Clone> TryFrom<&[T]> for Defaults<T> {
    type Error = ConvertError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        match values {
            [] => Ok(Self::none()),
            [value] => Ok(Self::one(value.clone())),
            _ => Err(ConvertError::DefaultValue { count: values.len() }),
        }
    }
}

impl<T> From<Option<T>> for Defaults<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}
