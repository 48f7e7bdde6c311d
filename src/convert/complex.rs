use crate::{
    convert::core::{checked, resolve, unsupported, wrong_target},
    grammar::parse::parse_complex,
    outcome::ConversionOutcome,
    util::num::{
        is_safe_complex, is_safe_float, is_safe_int_to_float, is_safe_uint_to_float, narrow_float,
    },
    value::{
        complex::{Complex64, Complex128},
        core::{Scalar, Value},
        shape::{NumericShape, Width},
    },
};

/// Converts a value to a complex number with components of the target's
/// width.
///
/// Strings go through the complex grammar and keep its error kinds: a text
/// that does not look like a complex number is a `Convert` error with no
/// value, a component that fails to parse is an `UnexpectedValue` error with
/// the partial value. Real sources become `re+0i` under the float rules.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_complex,
///     value::{
///         complex::Complex128,
///         core::Value,
///         shape::{NumericShape, Width},
///     },
/// };
///
/// let complex128 = NumericShape::Complex(Width::W64);
///
/// let outcome = to_complex(&Value::from("(1-2i)"), complex128);
/// assert_eq!(outcome.value(), Some(&Complex128::new(1.0, -2.0)));
///
/// let outcome = to_complex(&Value::Int8(5), complex128);
/// assert_eq!(outcome.value(), Some(&Complex128::new(5.0, 0.0)));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn to_complex(value: &Value, target: NumericShape) -> ConversionOutcome<Complex128> {
    let bits = match target {
        NumericShape::Complex(bits) if target.is_valid() => bits,
        _ => return wrong_target(value, target, "complex"),
    };
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    let real = |v: f64| Complex128::from(narrow_float(v, bits));

    match source.scalar() {
        Scalar::Text(text) => parse_complex(text, bits),
        Scalar::Int(v, _) => checked(real(v as f64), is_safe_int_to_float(v, bits), source, target),
        Scalar::Uint(v, _) => {
            checked(real(v as f64), is_safe_uint_to_float(v, bits), source, target)
        },
        Scalar::Float(v, _) => checked(real(v), is_safe_float(v, bits), source, target),
        Scalar::Complex(c, _) => {
            let narrowed = Complex128::new(narrow_float(c.real, bits),
                                           narrow_float(c.imaginary, bits));
            checked(narrowed, is_safe_complex(c, bits), source, target)
        },
        Scalar::Bool(b) => ConversionOutcome::exact(real(if b { 1.0 } else { 0.0 })),
        Scalar::Other(_) => unsupported(source, target),
    }
}

/// Converts a value to [`Complex64`]. See [`to_complex`].
pub fn to_complex64(value: &Value) -> ConversionOutcome<Complex64> {
    to_complex(value, NumericShape::Complex(Width::W32)).map(Complex128::narrow)
}

/// Converts a value to [`Complex128`]. See [`to_complex`].
pub fn to_complex128(value: &Value) -> ConversionOutcome<Complex128> {
    to_complex(value, NumericShape::Complex(Width::W64))
}
