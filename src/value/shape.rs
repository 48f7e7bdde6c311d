use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::ConvertError, value::core::Value};

/// Bit width of a numeric shape.
///
/// For complex shapes this is the width of each float component, so
/// `Complex(W32)` is a `complex64` and `Complex(W64)` a `complex128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

/// Every width, narrowest first.
pub const WIDTHS: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

impl Width {
    /// Returns the number of bits.
    ///
    /// # Example
    /// ```
    /// use exactcast::value::shape::Width;
    ///
    /// assert_eq!(Width::W16.bits(), 16);
    /// ```
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Looks up the width for a bit count, if it is one of 8, 16, 32 or 64.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = ConvertError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| {
                                 ConvertError::invalid_argument(format!("{bits} is not a \
                                                                         supported bit width"))
                             })
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// The category of a value as seen by the conversion dispatcher.
///
/// This replaces runtime type inspection: every [`Value`] maps to exactly one
/// shape, and the dispatcher matches on shapes exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericShape {
    /// A two's-complement integer.
    SignedInt(Width),
    /// An unsigned integer.
    UnsignedInt(Width),
    /// An IEEE-754 binary float. Only `W32` and `W64` exist.
    Float(Width),
    /// A complex number; the width is that of each component.
    Complex(Width),
    /// A boolean.
    Bool,
    /// A UTF-8 string.
    String,
    /// Anything else: composites, nil, unresolved references.
    Other,
}

impl NumericShape {
    /// Classifies a value after following its references.
    ///
    /// Values that cannot be dereferenced (nil, too deeply nested) are
    /// classified as [`NumericShape::Other`].
    ///
    /// # Example
    /// ```
    /// use exactcast::value::{
    ///     core::Value,
    ///     shape::{NumericShape, Width},
    /// };
    ///
    /// let boxed = Value::Ref(Box::new(Value::Uint16(7)));
    /// assert_eq!(NumericShape::of(&boxed), NumericShape::UnsignedInt(Width::W16));
    /// assert_eq!(NumericShape::of(&Value::Null), NumericShape::Other);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        value.resolve().map_or(Self::Other, Value::shape)
    }

    /// Returns `true` for signed integer shapes.
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::SignedInt(_))
    }

    /// Returns `true` for unsigned integer shapes.
    #[must_use]
    pub const fn is_uint(self) -> bool {
        matches!(self, Self::UnsignedInt(_))
    }

    /// Returns `true` for float shapes.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` for complex shapes.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex(_))
    }

    /// Returns `true` for any integer, float or complex shape.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_int() || self.is_uint() || self.is_float() || self.is_complex()
    }

    /// Returns `true` for the boolean shape.
    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Returns `true` for the string shape.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns the bit width of a numeric shape.
    ///
    /// # Example
    /// ```
    /// use exactcast::value::shape::{NumericShape, Width};
    ///
    /// assert_eq!(NumericShape::Float(Width::W32).width(), Some(Width::W32));
    /// assert_eq!(NumericShape::Bool.width(), None);
    /// ```
    #[must_use]
    pub const fn width(self) -> Option<Width> {
        match self {
            Self::SignedInt(w) | Self::UnsignedInt(w) | Self::Float(w) | Self::Complex(w) => {
                Some(w)
            },
            Self::Bool | Self::String | Self::Other => None,
        }
    }

    /// Returns `false` for shapes that cannot exist, i.e. floats and complex
    /// numbers narrower than 32 bits.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Float(w) | Self::Complex(w) => matches!(w, Width::W32 | Width::W64),
            _ => true,
        }
    }
}

impl Display for NumericShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignedInt(w) => write!(f, "int{w}"),
            Self::UnsignedInt(w) => write!(f, "uint{w}"),
            Self::Float(w) => write!(f, "float{w}"),
            Self::Complex(w) => write!(f, "complex{}", w.bits() * 2),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
            Self::Other => write!(f, "other"),
        }
    }
}
