use crate::{
    convert::core::{checked, resolve, unparseable, unsupported, wrong_target},
    grammar::parse::parse_int,
    outcome::ConversionOutcome,
    util::num::{
        is_safe_complex_to_int, is_safe_float_to_int, is_safe_int, is_safe_uint_to_int, wrap_int,
    },
    value::{
        core::{Scalar, Value},
        shape::{NumericShape, Width},
    },
};

/// Converts a value to a signed integer of the target's width.
///
/// The value is widened to `i64`; on an unsafe conversion it holds the source
/// wrapped to the target width, two's-complement style.
///
/// - Strings are parsed as integer literals; a literal that does not parse
///   or does not fit gives a `Convert` error and no value.
/// - Integers must fit the target range.
/// - Floats and complex numbers must be integral and within range, and
///   complex numbers must have a zero imaginary part. The best-effort value
///   truncates the real part.
/// - `true` is `1` and `false` is `0`.
/// - Anything else is a `Convert` error with no value.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_int,
///     value::{
///         core::Value,
///         shape::{NumericShape, Width},
///     },
/// };
///
/// let int8 = NumericShape::SignedInt(Width::W8);
///
/// assert!(to_int(&Value::Uint16(127), int8).is_exact());
/// assert_eq!(to_int(&Value::from("-0x80"), int8).value(), Some(&-128));
/// assert_eq!(to_int(&Value::Float64(3.5), int8).value(), Some(&3));
/// assert!(to_int(&Value::Float64(3.5), int8).error().is_some());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn to_int(value: &Value, target: NumericShape) -> ConversionOutcome<i64> {
    let NumericShape::SignedInt(bits) = target else {
        return wrong_target(value, target, "signed integer");
    };
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    match source.scalar() {
        Scalar::Text(text) => match parse_int(text, bits) {
            Ok(v) => ConversionOutcome::exact(v),
            Err(e) => unparseable(&e, target),
        },
        Scalar::Int(v, _) => checked(wrap_int(v, bits), is_safe_int(v, bits), source, target),
        Scalar::Uint(v, _) => {
            checked(wrap_int(v as i64, bits), is_safe_uint_to_int(v, bits), source, target)
        },
        Scalar::Float(v, float_bits) => {
            checked(wrap_int(v as i64, bits),
                    is_safe_float_to_int(v, float_bits, bits),
                    source,
                    target)
        },
        Scalar::Complex(c, float_bits) => {
            checked(wrap_int(c.real as i64, bits),
                    is_safe_complex_to_int(c, float_bits, bits),
                    source,
                    target)
        },
        Scalar::Bool(b) => ConversionOutcome::exact(i64::from(b)),
        Scalar::Other(_) => unsupported(source, target),
    }
}

/// Defines a typed wrapper around [`to_int`] for one Rust integer type.
macro_rules! typed_int {
    ($($(#[$meta:meta])* $name:ident -> $ty:ty, $width:expr;)*) => {
        $(
            $(#[$meta])*
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            pub fn $name(value: &Value) -> ConversionOutcome<$ty> {
                to_int(value, NumericShape::SignedInt($width)).map(|v| v as $ty)
            }
        )*
    };
}

typed_int! {
    /// Converts a value to `i8`. See [`to_int`].
    ///
    /// # Example
    /// ```
    /// use exactcast::{convert::to_i8, value::core::Value};
    ///
    /// let outcome = to_i8(&Value::Int64(200));
    /// assert_eq!(outcome.value(), Some(&-56));
    /// assert!(outcome.error().is_some());
    /// ```
    to_i8 -> i8, Width::W8;
    /// Converts a value to `i16`. See [`to_int`].
    to_i16 -> i16, Width::W16;
    /// Converts a value to `i32`. See [`to_int`].
    to_i32 -> i32, Width::W32;
    /// Converts a value to `i64`. See [`to_int`].
    to_i64 -> i64, Width::W64;
    /// Converts a value to `isize`, always as a 64-bit integer. See
    /// [`to_int`].
    to_isize -> isize, Width::W64;
}
