use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    accessor::{
        core::{Accessor, NotNullable, Nullable},
        sql::DriverValue,
    },
    convert::{
        BoolOptions, to_bool, to_complex64, to_complex128, to_f32, to_f64, to_i8, to_i16, to_i32,
        to_i64, to_isize, to_string, to_u8, to_u16, to_u32, to_u64, to_usize,
    },
    error::ConvertError,
    grammar::format::FormatOptions,
    outcome::ConversionOutcome,
    value::{
        complex::{Complex64, Complex128},
        core::Value,
        shape::{NumericShape, Width},
    },
};

/// A type an [`Accessor`] can hold.
///
/// Each element knows which shape it is, how to get there from any
/// [`Value`], and how to leave again as a [`Value`] or a driver scalar.
pub trait Element: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned {
    /// The shape values are converted to.
    const SHAPE: NumericShape;

    /// Converts a value through the dispatcher.
    fn convert(value: &Value) -> ConversionOutcome<Self>;

    /// Wraps the element back into a [`Value`].
    fn to_value(&self) -> Value;

    /// Converts the element into the scalar a SQL driver stores.
    ///
    /// # Errors
    /// Returns `ConvertError::Convert` if the element does not fit the
    /// driver's 64-bit signed integer.
    fn to_driver(&self) -> Result<DriverValue, ConvertError>;
}

/// Implements [`Element`] for integer types that always fit an `i64`.
macro_rules! signed_element {
    ($($ty:ty => $convert:ident, $shape:expr;)*) => {
        $(
            impl Element for $ty {
                const SHAPE: NumericShape = $shape;

                fn convert(value: &Value) -> ConversionOutcome<Self> {
                    $convert(value)
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                #[allow(clippy::cast_possible_wrap,
                        clippy::cast_lossless,
                        clippy::unnecessary_cast)]
                fn to_driver(&self) -> Result<DriverValue, ConvertError> {
                    Ok(DriverValue::Int64(*self as i64))
                }
            }
        )*
    };
}

/// Implements [`Element`] for unsigned types that may exceed `i64::MAX`.
macro_rules! unsigned_element {
    ($($ty:ty => $convert:ident;)*) => {
        $(
            impl Element for $ty {
                const SHAPE: NumericShape = NumericShape::UnsignedInt(Width::W64);

                fn convert(value: &Value) -> ConversionOutcome<Self> {
                    $convert(value)
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn to_driver(&self) -> Result<DriverValue, ConvertError> {
                    i64::try_from(*self).map(DriverValue::Int64).map_err(|_| {
                        ConvertError::convert(Self::SHAPE,
                                              NumericShape::SignedInt(Width::W64),
                                              format!("{self} exceeds the driver's integer range"))
                    })
                }
            }
        )*
    };
}

signed_element! {
    i8    => to_i8,    NumericShape::SignedInt(Width::W8);
    i16   => to_i16,   NumericShape::SignedInt(Width::W16);
    i32   => to_i32,   NumericShape::SignedInt(Width::W32);
    i64   => to_i64,   NumericShape::SignedInt(Width::W64);
    isize => to_isize, NumericShape::SignedInt(Width::W64);
    u8    => to_u8,    NumericShape::UnsignedInt(Width::W8);
    u16   => to_u16,   NumericShape::UnsignedInt(Width::W16);
    u32   => to_u32,   NumericShape::UnsignedInt(Width::W32);
}

unsigned_element! {
    u64   => to_u64;
    usize => to_usize;
}

impl Element for f32 {
    const SHAPE: NumericShape = NumericShape::Float(Width::W32);

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_f32(value)
    }

    fn to_value(&self) -> Value {
        Value::Float32(*self)
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Float64(f64::from(*self)))
    }
}

impl Element for f64 {
    const SHAPE: NumericShape = NumericShape::Float(Width::W64);

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_f64(value)
    }

    fn to_value(&self) -> Value {
        Value::Float64(*self)
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Float64(*self))
    }
}

impl Element for Complex64 {
    const SHAPE: NumericShape = NumericShape::Complex(Width::W32);

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_complex64(value)
    }

    fn to_value(&self) -> Value {
        Value::Complex64(*self)
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Text(self.to_string()))
    }
}

impl Element for Complex128 {
    const SHAPE: NumericShape = NumericShape::Complex(Width::W64);

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_complex128(value)
    }

    fn to_value(&self) -> Value {
        Value::Complex128(*self)
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Text(self.to_string()))
    }
}

impl Element for bool {
    const SHAPE: NumericShape = NumericShape::Bool;

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_bool(value, BoolOptions::HUMANIZED)
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Bool(*self))
    }
}

impl Element for String {
    const SHAPE: NumericShape = NumericShape::String;

    fn convert(value: &Value) -> ConversionOutcome<Self> {
        to_string(value, &FormatOptions::default())
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn to_driver(&self) -> Result<DriverValue, ConvertError> {
        Ok(DriverValue::Text(self.clone()))
    }
}

/// Nullable `i8` accessor.
pub type NullInt8 = Accessor<i8, Nullable>;
/// Non-nullable `i8` accessor.
pub type Int8 = Accessor<i8, NotNullable>;
/// Nullable `i16` accessor.
pub type NullInt16 = Accessor<i16, Nullable>;
/// Non-nullable `i16` accessor.
pub type Int16 = Accessor<i16, NotNullable>;
/// Nullable `i32` accessor.
pub type NullInt32 = Accessor<i32, Nullable>;
/// Non-nullable `i32` accessor.
pub type Int32 = Accessor<i32, NotNullable>;
/// Nullable `i64` accessor.
pub type NullInt64 = Accessor<i64, Nullable>;
/// Non-nullable `i64` accessor.
pub type Int64 = Accessor<i64, NotNullable>;
/// Nullable `isize` accessor.
pub type NullInt = Accessor<isize, Nullable>;
/// Non-nullable `isize` accessor.
pub type Int = Accessor<isize, NotNullable>;
/// Nullable `u8` accessor.
pub type NullUint8 = Accessor<u8, Nullable>;
/// Non-nullable `u8` accessor.
pub type Uint8 = Accessor<u8, NotNullable>;
/// Nullable `u16` accessor.
pub type NullUint16 = Accessor<u16, Nullable>;
/// Non-nullable `u16` accessor.
pub type Uint16 = Accessor<u16, NotNullable>;
/// Nullable `u32` accessor.
pub type NullUint32 = Accessor<u32, Nullable>;
/// Non-nullable `u32` accessor.
pub type Uint32 = Accessor<u32, NotNullable>;
/// Nullable `u64` accessor.
pub type NullUint64 = Accessor<u64, Nullable>;
/// Non-nullable `u64` accessor.
pub type Uint64 = Accessor<u64, NotNullable>;
/// Nullable `usize` accessor.
pub type NullUint = Accessor<usize, Nullable>;
/// Non-nullable `usize` accessor.
pub type Uint = Accessor<usize, NotNullable>;
/// Nullable `f32` accessor.
pub type NullFloat32 = Accessor<f32, Nullable>;
/// Non-nullable `f32` accessor.
pub type Float32 = Accessor<f32, NotNullable>;
/// Nullable `f64` accessor.
pub type NullFloat64 = Accessor<f64, Nullable>;
/// Non-nullable `f64` accessor.
pub type Float64 = Accessor<f64, NotNullable>;
/// Nullable [`Complex64`] accessor.
pub type NullComplex64 = Accessor<Complex64, Nullable>;
/// Non-nullable [`Complex64`] accessor.
pub type Complex64Accessor = Accessor<Complex64, NotNullable>;
/// Nullable [`Complex128`] accessor.
pub type NullComplex128 = Accessor<Complex128, Nullable>;
/// Non-nullable [`Complex128`] accessor.
pub type Complex128Accessor = Accessor<Complex128, NotNullable>;
/// Nullable `bool` accessor.
pub type NullBool = Accessor<bool, Nullable>;
/// Non-nullable `bool` accessor.
pub type Bool = Accessor<bool, NotNullable>;
/// Nullable `String` accessor.
pub type NullString = Accessor<String, Nullable>;
/// Non-nullable `String` accessor.
pub type Str = Accessor<String, NotNullable>;
