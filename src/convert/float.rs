use crate::{
    convert::core::{checked, resolve, unparseable, unsupported, wrong_target},
    grammar::parse::parse_float,
    outcome::ConversionOutcome,
    util::num::{
        is_safe_complex_to_float, is_safe_float, is_safe_int_to_float, is_safe_uint_to_float,
        narrow_float,
    },
    value::{
        core::{Scalar, Value},
        shape::{NumericShape, Width},
    },
};

/// Converts a value to a float of the target's width.
///
/// The result is carried as `f64` but is already rounded to `f32` precision
/// for a 32-bit target.
///
/// - Strings are parsed as float literals, including `inf` and `nan`.
/// - Integers must fit the float's significand exactly.
/// - Floats must survive narrowing; NaN and the infinities always do.
/// - Complex numbers must have a zero imaginary part.
/// - `true` is `1.0` and `false` is `0.0`.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_float,
///     value::{
///         core::Value,
///         shape::{NumericShape, Width},
///     },
/// };
///
/// let float32 = NumericShape::Float(Width::W32);
///
/// assert!(to_float(&Value::Int64(16_777_215), float32).is_exact());
/// assert!(!to_float(&Value::Int64(16_777_217), float32).is_exact());
/// assert!(!to_float(&Value::Float64(0.1), float32).is_exact());
/// assert!(to_float(&Value::from("nan"), float32).value().unwrap().is_nan());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn to_float(value: &Value, target: NumericShape) -> ConversionOutcome<f64> {
    let bits = match target {
        NumericShape::Float(bits) if target.is_valid() => bits,
        _ => return wrong_target(value, target, "float"),
    };
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    match source.scalar() {
        Scalar::Text(text) => match parse_float(text, bits) {
            Ok(v) => ConversionOutcome::exact(v),
            Err(e) => unparseable(&e, target),
        },
        Scalar::Int(v, _) => {
            checked(narrow_float(v as f64, bits), is_safe_int_to_float(v, bits), source, target)
        },
        Scalar::Uint(v, _) => {
            checked(narrow_float(v as f64, bits), is_safe_uint_to_float(v, bits), source, target)
        },
        Scalar::Float(v, _) => {
            checked(narrow_float(v, bits), is_safe_float(v, bits), source, target)
        },
        Scalar::Complex(c, _) => {
            checked(narrow_float(c.real, bits), is_safe_complex_to_float(c, bits), source, target)
        },
        Scalar::Bool(b) => ConversionOutcome::exact(if b { 1.0 } else { 0.0 }),
        Scalar::Other(_) => unsupported(source, target),
    }
}

/// Converts a value to `f32`. See [`to_float`].
///
/// # Example
/// ```
/// use exactcast::{convert::to_f32, value::core::Value};
///
/// assert_eq!(to_f32(&Value::Float64(0.5)).value(), Some(&0.5f32));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn to_f32(value: &Value) -> ConversionOutcome<f32> {
    to_float(value, NumericShape::Float(Width::W32)).map(|v| v as f32)
}

/// Converts a value to `f64`. See [`to_float`].
pub fn to_f64(value: &Value) -> ConversionOutcome<f64> {
    to_float(value, NumericShape::Float(Width::W64))
}
