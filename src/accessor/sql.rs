use crate::{
    accessor::{
        core::{Accessor, Nullability},
        element::Element,
    },
    error::ConvertError,
    value::core::Value,
};

/// A scalar as exchanged with a SQL driver.
///
/// Drivers store integers as 64-bit signed values, reals as `f64`, and
/// everything else as text or blobs.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL `NULL`.
    Null,
    /// An integer column.
    Int64(i64),
    /// A real column.
    Float64(f64),
    /// A boolean column.
    Bool(bool),
    /// A text column.
    Text(String),
    /// A blob column.
    Bytes(Vec<u8>),
}

impl From<DriverValue> for Value {
    /// Byte strings that are valid UTF-8 become text.
    fn from(raw: DriverValue) -> Self {
        match raw {
            DriverValue::Null => Self::Null,
            DriverValue::Int64(n) => Self::Int64(n),
            DriverValue::Float64(r) => Self::Float64(r),
            DriverValue::Bool(b) => Self::Bool(b),
            DriverValue::Text(s) => Self::String(s),
            DriverValue::Bytes(b) => match String::from_utf8(b) {
                Ok(s) => Self::String(s),
                Err(e) => Self::Bytes(e.into_bytes()),
            },
        }
    }
}

/// Produces the value written to a SQL driver.
pub trait Valuer {
    /// Returns the driver scalar for this value.
    ///
    /// # Errors
    /// Returns `ConvertError::Convert` if the value does not fit the
    /// driver's representation.
    fn driver_value(&self) -> Result<DriverValue, ConvertError>;
}

/// Reads a value back from a SQL driver.
pub trait Scanner {
    /// Replaces the current state with `raw`.
    ///
    /// # Errors
    /// Returns the conversion's error if `raw` does not convert exactly. The
    /// state is updated either way.
    fn scan(&mut self, raw: DriverValue) -> Result<(), ConvertError>;
}

impl<T: Element, N: Nullability> Valuer for Accessor<T, N> {
    /// Nullable accessors write `NULL` when absent or invalid.
    ///
    /// # Example
    /// ```
    /// use exactcast::accessor::{
    ///     element::{NullComplex128, NullUint64},
    ///     sql::{DriverValue, Valuer},
    /// };
    /// use exactcast::value::complex::Complex128;
    ///
    /// let c = NullComplex128::new(Complex128::new(1.0, -1.0));
    /// assert_eq!(c.driver_value().unwrap(), DriverValue::Text("(1-1i)".into()));
    ///
    /// assert!(NullUint64::new(u64::MAX).driver_value().is_err());
    /// assert_eq!(NullUint64::absent().driver_value().unwrap(), DriverValue::Null);
    /// ```
    fn driver_value(&self) -> Result<DriverValue, ConvertError> {
        if N::NULLABLE && (!self.valid() || !self.present()) {
            return Ok(DriverValue::Null);
        }

        self.v().to_driver()
    }
}

impl<T: Element, N: Nullability> Scanner for Accessor<T, N> {
    /// # Example
    /// ```
    /// use exactcast::accessor::{
    ///     element::NullInt16,
    ///     sql::{DriverValue, Scanner},
    /// };
    ///
    /// let mut accessor = NullInt16::default();
    /// accessor.scan(DriverValue::Bytes(b"-42".to_vec())).unwrap();
    /// assert_eq!(accessor.v(), -42);
    ///
    /// accessor.scan(DriverValue::Null).unwrap();
    /// assert!(!accessor.present());
    /// ```
    fn scan(&mut self, raw: DriverValue) -> Result<(), ConvertError> {
        *self = match raw {
            DriverValue::Null => Self::absent(),
            raw => Self::from_value(&Value::from(raw)),
        };

        match self.err() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
