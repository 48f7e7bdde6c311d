use crate::{
    convert::core::{checked, resolve, unparseable, unsupported, wrong_target},
    grammar::parse::parse_uint,
    outcome::ConversionOutcome,
    util::num::{
        is_safe_complex_to_uint, is_safe_float_to_uint, is_safe_int_to_uint, is_safe_uint,
        wrap_uint,
    },
    value::{
        core::{Scalar, Value},
        shape::{NumericShape, Width},
    },
};

/// Converts a value to an unsigned integer of the target's width.
///
/// Same rules as [`to_int`](crate::convert::to_int), with negative sources
/// never safe. Best-effort values are truncated to the target width, so `-1`
/// becomes the target's maximum.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_uint,
///     value::{
///         core::Value,
///         shape::{NumericShape, Width},
///     },
/// };
///
/// let uint8 = NumericShape::UnsignedInt(Width::W8);
///
/// assert!(to_uint(&Value::Int32(255), uint8).is_exact());
/// assert_eq!(to_uint(&Value::Int32(-1), uint8).value(), Some(&255));
/// assert!(to_uint(&Value::Int32(-1), uint8).error().is_some());
/// assert!(to_uint(&Value::from("-1"), uint8).value().is_none());
/// ```
#[allow(clippy::cast_sign_loss)]
pub fn to_uint(value: &Value, target: NumericShape) -> ConversionOutcome<u64> {
    let NumericShape::UnsignedInt(bits) = target else {
        return wrong_target(value, target, "unsigned integer");
    };
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    match source.scalar() {
        Scalar::Text(text) => match parse_uint(text, bits) {
            Ok(v) => ConversionOutcome::exact(v),
            Err(e) => unparseable(&e, target),
        },
        Scalar::Int(v, _) => {
            checked(wrap_uint(v as u64, bits), is_safe_int_to_uint(v, bits), source, target)
        },
        Scalar::Uint(v, _) => checked(wrap_uint(v, bits), is_safe_uint(v, bits), source, target),
        Scalar::Float(v, float_bits) => {
            checked(wrap_uint(float_bits_of(v), bits),
                    is_safe_float_to_uint(v, float_bits, bits),
                    source,
                    target)
        },
        Scalar::Complex(c, float_bits) => {
            checked(wrap_uint(float_bits_of(c.real), bits),
                    is_safe_complex_to_uint(c, float_bits, bits),
                    source,
                    target)
        },
        Scalar::Bool(b) => ConversionOutcome::exact(u64::from(b)),
        Scalar::Other(_) => unsupported(source, target),
    }
}

/// Truncates a float towards zero, going through `i64` for negative values
/// so that they wrap instead of saturating at zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_bits_of(value: f64) -> u64 {
    if value < 0.0 { value as i64 as u64 } else { value as u64 }
}

/// Defines a typed wrapper around [`to_uint`] for one Rust integer type.
macro_rules! typed_uint {
    ($($(#[$meta:meta])* $name:ident -> $ty:ty, $width:expr;)*) => {
        $(
            $(#[$meta])*
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            pub fn $name(value: &Value) -> ConversionOutcome<$ty> {
                to_uint(value, NumericShape::UnsignedInt($width)).map(|v| v as $ty)
            }
        )*
    };
}

typed_uint! {
    /// Converts a value to `u8`. See [`to_uint`].
    to_u8 -> u8, Width::W8;
    /// Converts a value to `u16`. See [`to_uint`].
    to_u16 -> u16, Width::W16;
    /// Converts a value to `u32`. See [`to_uint`].
    to_u32 -> u32, Width::W32;
    /// Converts a value to `u64`. See [`to_uint`].
    ///
    /// # Example
    /// ```
    /// use exactcast::{convert::to_u64, value::core::Value};
    ///
    /// assert_eq!(to_u64(&Value::from("18446744073709551615")).value(), Some(&u64::MAX));
    /// ```
    to_u64 -> u64, Width::W64;
    /// Converts a value to `usize`, always as a 64-bit integer. See
    /// [`to_uint`].
    to_usize -> usize, Width::W64;
}
