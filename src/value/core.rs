use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    mem,
};

use ordered_float::OrderedFloat;

use crate::{
    error::ConvertError,
    grammar::format::{FloatFormat, format_float},
    value::{
        complex::{Complex64, Complex128},
        shape::{
            NumericShape, Width,
            Width::{W8, W16, W32, W64},
        },
    },
};

/// Maximum number of `Ref` links [`Value::resolve`] follows before giving up.
pub const MAX_DEREF_DEPTH: usize = 32;

/// Represents a dynamically typed value handed to the conversion engine.
///
/// This enum models everything a JSON document, a SQL driver or a host
/// application can pass in. The numeric variants map one-to-one onto
/// [`NumericShape`]s; the composite variants exist so that the boolean
/// conversion and the string dump can handle them.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A nil pointer, nil interface, JSON `null` or SQL `NULL`.
    #[default]
    Null,
    /// One level of indirection (a pointer or an interface box).
    Ref(Box<Self>),
    /// A boolean.
    Bool(bool),
    /// An 8-bit signed integer.
    Int8(i8),
    /// A 16-bit signed integer.
    Int16(i16),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A platform-native signed integer, always treated as 64 bits wide.
    Int(isize),
    /// An 8-bit unsigned integer.
    Uint8(u8),
    /// A 16-bit unsigned integer.
    Uint16(u16),
    /// A 32-bit unsigned integer.
    Uint32(u32),
    /// A 64-bit unsigned integer.
    Uint64(u64),
    /// A platform-native unsigned integer, always treated as 64 bits wide.
    Uint(usize),
    /// A single precision float.
    Float32(f32),
    /// A double precision float.
    Float64(f64),
    /// A complex number with `f32` components.
    Complex64(Complex64),
    /// A complex number with `f64` components.
    Complex128(Complex128),
    /// A UTF-8 string.
    String(String),
    /// A raw byte string.
    Bytes(Vec<u8>),
    /// An ordered list of values.
    Array(Vec<Self>),
    /// A list of key/value pairs.
    Map(Vec<(Self, Self)>),
}

impl Value {
    /// Follows `Ref` links until a concrete value is reached.
    ///
    /// This is the explicit unwrap pass run once before the dispatcher looks
    /// at a value.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidArgument` if the chain ends in `Null` or
    /// is longer than [`MAX_DEREF_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use exactcast::{error::ErrorKind, value::core::Value};
    ///
    /// let boxed = Value::Ref(Box::new(Value::Ref(Box::new(Value::Int8(3)))));
    /// assert_eq!(boxed.resolve().unwrap(), &Value::Int8(3));
    ///
    /// let nil = Value::Ref(Box::new(Value::Null));
    /// assert_eq!(nil.resolve().unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn resolve(&self) -> Result<&Self, ConvertError> {
        let mut current = self;
        for _ in 0..=MAX_DEREF_DEPTH {
            match current {
                Self::Ref(inner) => current = inner,
                Self::Null => return Err(ConvertError::invalid_argument("nil value")),
                _ => return Ok(current),
            }
        }

        Err(ConvertError::invalid_argument(format!("more than {MAX_DEREF_DEPTH} levels of \
                                                    indirection")))
    }

    /// Returns the shape of this value without following references.
    ///
    /// `Null`, `Ref` and composite values are [`NumericShape::Other`]; use
    /// [`NumericShape::of`] to classify through references.
    #[must_use]
    pub const fn shape(&self) -> NumericShape {
        match self {
            Self::Int8(_) => NumericShape::SignedInt(W8),
            Self::Int16(_) => NumericShape::SignedInt(W16),
            Self::Int32(_) => NumericShape::SignedInt(W32),
            Self::Int64(_) | Self::Int(_) => NumericShape::SignedInt(W64),
            Self::Uint8(_) => NumericShape::UnsignedInt(W8),
            Self::Uint16(_) => NumericShape::UnsignedInt(W16),
            Self::Uint32(_) => NumericShape::UnsignedInt(W32),
            Self::Uint64(_) | Self::Uint(_) => NumericShape::UnsignedInt(W64),
            Self::Float32(_) => NumericShape::Float(W32),
            Self::Float64(_) => NumericShape::Float(W64),
            Self::Complex64(_) => NumericShape::Complex(W32),
            Self::Complex128(_) => NumericShape::Complex(W64),
            Self::Bool(_) => NumericShape::Bool,
            Self::String(_) => NumericShape::String,
            Self::Null | Self::Ref(_) | Self::Bytes(_) | Self::Array(_) | Self::Map(_) => {
                NumericShape::Other
            },
        }
    }

    /// Widens a signed integer value to `i64`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(n) => Some(*n as i64),
            Self::Int16(n) => Some(*n as i64),
            Self::Int32(n) => Some(*n as i64),
            Self::Int64(n) => Some(*n),
            Self::Int(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Widens an unsigned integer value to `u64`.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint8(n) => Some(*n as u64),
            Self::Uint16(n) => Some(*n as u64),
            Self::Uint32(n) => Some(*n as u64),
            Self::Uint64(n) => Some(*n),
            Self::Uint(n) => Some(*n as u64),
            _ => None,
        }
    }

    /// Widens a float value to `f64`. Widening is always exact.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(r) => Some(f64::from(*r)),
            Self::Float64(r) => Some(*r),
            _ => None,
        }
    }

    /// Widens a complex value to [`Complex128`]. Widening is always exact.
    #[must_use]
    pub fn as_complex(&self) -> Option<Complex128> {
        match self {
            Self::Complex64(c) => Some(Complex128::from(*c)),
            Self::Complex128(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the number of elements of an array, map or byte string.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Array(a) => Some(a.len()),
            Self::Map(m) => Some(m.len()),
            Self::Bytes(b) => Some(b.len()),
            _ => None,
        }
    }

    /// Returns `true` if the value is its type's zero value.
    ///
    /// Numbers are zero when they compare equal to zero, strings and byte
    /// strings when empty, arrays when every element is zero and maps when
    /// empty. `Null` is always zero.
    ///
    /// # Example
    /// ```
    /// use exactcast::value::core::Value;
    ///
    /// assert!(Value::Array(vec![Value::Int8(0), Value::Bool(false)]).is_zero());
    /// assert!(!Value::Array(vec![Value::Int8(1)]).is_zero());
    /// assert!(Value::Map(vec![]).is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Ref(inner) => inner.is_zero(),
            Self::Bool(b) => !b,
            Self::Float32(r) => *r == 0.0,
            Self::Float64(r) => *r == 0.0,
            Self::Complex64(c) => c.real == 0.0 && c.imaginary == 0.0,
            Self::Complex128(c) => c.real == 0.0 && c.imaginary == 0.0,
            Self::String(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::Array(a) => a.iter().all(Self::is_zero),
            Self::Map(m) => m.is_empty(),
            _ => self.as_i64() == Some(0) || self.as_u64() == Some(0),
        }
    }

    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Views the value through its widest carrier type.
    ///
    /// Integers widen to `i64`/`u64`, floats to `f64` and complex numbers to
    /// [`Complex128`]; the original width travels alongside. References are
    /// not followed.
    ///
    /// # Example
    /// ```
    /// use exactcast::value::{
    ///     core::{Scalar, Value},
    ///     shape::Width,
    /// };
    ///
    /// assert_eq!(Value::Int16(-3).scalar(), Scalar::Int(-3, Width::W16));
    /// assert_eq!(Value::from("7").scalar(), Scalar::Text("7"));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn scalar(&self) -> Scalar<'_> {
        match self {
            Self::Int8(n) => Scalar::Int(i64::from(*n), W8),
            Self::Int16(n) => Scalar::Int(i64::from(*n), W16),
            Self::Int32(n) => Scalar::Int(i64::from(*n), W32),
            Self::Int64(n) => Scalar::Int(*n, W64),
            Self::Int(n) => Scalar::Int(*n as i64, W64),
            Self::Uint8(n) => Scalar::Uint(u64::from(*n), W8),
            Self::Uint16(n) => Scalar::Uint(u64::from(*n), W16),
            Self::Uint32(n) => Scalar::Uint(u64::from(*n), W32),
            Self::Uint64(n) => Scalar::Uint(*n, W64),
            Self::Uint(n) => Scalar::Uint(*n as u64, W64),
            Self::Float32(r) => Scalar::Float(f64::from(*r), W32),
            Self::Float64(r) => Scalar::Float(*r, W64),
            Self::Complex64(c) => Scalar::Complex(Complex128::from(*c), W32),
            Self::Complex128(c) => Scalar::Complex(*c, W64),
            Self::Bool(b) => Scalar::Bool(*b),
            Self::String(s) => Scalar::Text(s),
            Self::Null | Self::Ref(_) | Self::Bytes(_) | Self::Array(_) | Self::Map(_) => {
                Scalar::Other(self)
            },
        }
    }
}

/// A borrowed view of a [`Value`] with every number widened to its 64-bit
/// carrier.
///
/// The conversion functions match on this instead of on the dozen numeric
/// [`Value`] variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// A signed integer and its original width.
    Int(i64, Width),
    /// An unsigned integer and its original width.
    Uint(u64, Width),
    /// A float and its original width.
    Float(f64, Width),
    /// A complex number and the original width of its components.
    Complex(Complex128, Width),
    /// A boolean.
    Bool(bool),
    /// A string.
    Text(&'a str),
    /// Anything else.
    Other(&'a Value),
}

impl Scalar<'_> {
    /// Returns the shape the scalar was read from.
    #[must_use]
    pub const fn shape(&self) -> NumericShape {
        match self {
            Self::Int(_, w) => NumericShape::SignedInt(*w),
            Self::Uint(_, w) => NumericShape::UnsignedInt(*w),
            Self::Float(_, w) => NumericShape::Float(*w),
            Self::Complex(_, w) => NumericShape::Complex(*w),
            Self::Bool(_) => NumericShape::Bool,
            Self::Text(_) => NumericShape::String,
            Self::Other(_) => NumericShape::Other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::{
            Array, Bool, Bytes, Complex64, Complex128, Float32, Float64, Int, Int8, Int16, Int32,
            Int64, Map, Null, Ref, String, Uint, Uint8, Uint16, Uint32, Uint64,
        };

        match (self, other) {
            (Null, Null) => true,
            (Ref(a), Ref(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Int8(a), Int8(b)) => a == b,
            (Int16(a), Int16(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Uint8(a), Uint8(b)) => a == b,
            (Uint16(a), Uint16(b)) => a == b,
            (Uint32(a), Uint32(b)) => a == b,
            (Uint64(a), Uint64(b)) => a == b,
            (Uint(a), Uint(b)) => a == b,
            (Float32(a), Float32(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Float64(a), Float64(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Complex64(a), Complex64(b)) => a == b,
            (Complex128(a), Complex128(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Null => {},
            Self::Ref(inner) => inner.hash(state),
            Self::Bool(b) => b.hash(state),
            Self::Int8(n) => n.hash(state),
            Self::Int16(n) => n.hash(state),
            Self::Int32(n) => n.hash(state),
            Self::Int64(n) => n.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Uint8(n) => n.hash(state),
            Self::Uint16(n) => n.hash(state),
            Self::Uint32(n) => n.hash(state),
            Self::Uint64(n) => n.hash(state),
            Self::Uint(n) => n.hash(state),
            Self::Float32(r) => OrderedFloat(*r).hash(state),
            Self::Float64(r) => OrderedFloat(*r).hash(state),
            Self::Complex64(c) => c.hash(state),
            Self::Complex128(c) => c.hash(state),
            Self::String(s) => s.hash(state),
            Self::Bytes(b) => b.hash(state),
            Self::Array(a) => a.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Ref(inner) => write!(f, "{inner}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int8(n) => write!(f, "{n}"),
            Self::Int16(n) => write!(f, "{n}"),
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint8(n) => write!(f, "{n}"),
            Self::Uint16(n) => write!(f, "{n}"),
            Self::Uint32(n) => write!(f, "{n}"),
            Self::Uint64(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float32(r) => {
                write!(f, "{}", format_float(f64::from(*r), FloatFormat::General, None, W32))
            },
            Self::Float64(r) => write!(f, "{}", format_float(*r, FloatFormat::General, None, W64)),
            Self::Complex64(c) => write!(f, "{c}"),
            Self::Complex128(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bytes(b) => write!(f, "{b:?}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Map(m) => {
                write!(f, "{{")?;

                for (index, (key, value)) in m.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, "}}")
            },
        }
    }
}

/// Implements `From<$ty> for Value` for each `$ty => $variant` pair.
macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool       => Bool,
    i8         => Int8,
    i16        => Int16,
    i32        => Int32,
    i64        => Int64,
    isize      => Int,
    u8         => Uint8,
    u16        => Uint16,
    u32        => Uint32,
    u64        => Uint64,
    usize      => Uint,
    f32        => Float32,
    f64        => Float64,
    Complex64  => Complex64,
    Complex128 => Complex128,
    String     => String,
    Vec<u8>    => Bytes,
    Vec<Value> => Array,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value where T: Into<Self>
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    /// Imports a decoded JSON document.
    ///
    /// Integral numbers become `Int64` when they fit, then `Uint64`; every
    /// other number becomes `Float64`. Object keys become `String` values.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint64(u)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float64)
                }
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(a) => Self::Array(a.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(o) => {
                Self::Map(o.into_iter()
                           .map(|(key, value)| (Self::String(key), Self::from(value)))
                           .collect())
            },
        }
    }
}
