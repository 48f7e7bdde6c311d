use crate::value::{complex::Complex128, shape::Width};

/// Largest integer value whose every predecessor is exactly representable as
/// an `f64` (`2^53 - 1`).
pub const MAX_SAFE_F64_INT: u64 = 9_007_199_254_740_991;
/// Largest integer value whose every predecessor is exactly representable as
/// an `f32` (`2^24 - 1`).
pub const MAX_SAFE_F32_INT: u64 = 16_777_215;

/// Returns the number of significand bits (including the implicit leading
/// bit) of the float type with the given width.
///
/// Widths up to 32 bits map to `f32` (24 bits), everything wider to `f64`
/// (53 bits).
#[must_use]
pub const fn mantissa_bits(bits: Width) -> u32 {
    if bits.bits() <= 32 { f32::MANTISSA_DIGITS } else { f64::MANTISSA_DIGITS }
}

/// Returns the smallest value of a signed integer of the given width.
#[must_use]
pub const fn int_min(bits: Width) -> i64 {
    i64::MIN >> (64 - bits.bits())
}

/// Returns the largest value of a signed integer of the given width.
#[must_use]
pub const fn int_max(bits: Width) -> i64 {
    i64::MAX >> (64 - bits.bits())
}

/// Returns the largest value of an unsigned integer of the given width.
#[must_use]
pub const fn uint_max(bits: Width) -> u64 {
    u64::MAX >> (64 - bits.bits())
}

/// Checks whether a signed integer fits a signed integer of `bits` width.
///
/// ## Parameters
/// - `value`: The integer to check.
/// - `bits`: The target width.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_int, value::shape::Width};
///
/// assert!(is_safe_int(127, Width::W8));
/// assert!(!is_safe_int(128, Width::W8));
/// assert!(is_safe_int(-128, Width::W8));
/// assert!(!is_safe_int(-129, Width::W8));
/// ```
#[must_use]
pub const fn is_safe_int(value: i64, bits: Width) -> bool {
    int_min(bits) <= value && value <= int_max(bits)
}

/// Checks whether an unsigned integer fits an unsigned integer of `bits`
/// width.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_uint, value::shape::Width};
///
/// assert!(is_safe_uint(255, Width::W8));
/// assert!(!is_safe_uint(256, Width::W8));
/// assert!(is_safe_uint(u64::MAX, Width::W64));
/// ```
#[must_use]
pub const fn is_safe_uint(value: u64, bits: Width) -> bool {
    value <= uint_max(bits)
}

/// Checks whether a signed integer fits an unsigned integer of `bits` width.
///
/// Negative values never fit.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn is_safe_int_to_uint(value: i64, bits: Width) -> bool {
    value >= 0 && is_safe_uint(value as u64, bits)
}

/// Checks whether an unsigned integer fits a signed integer of `bits` width.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_uint_to_int, value::shape::Width};
///
/// assert!(is_safe_uint_to_int(127, Width::W8));
/// assert!(!is_safe_uint_to_int(128, Width::W8));
/// assert!(!is_safe_uint_to_int(u64::MAX, Width::W64));
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn is_safe_uint_to_int(value: u64, bits: Width) -> bool {
    value <= int_max(bits) as u64
}

/// Checks whether a float survives narrowing to a float of `bits` width.
///
/// NaN and both infinities are always reported as safe: they exist at every
/// width. For widths up to 32 bits a nonzero value must round-trip through
/// `f32` bit-for-bit; wider targets accept everything.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_float, value::shape::Width};
///
/// assert!(is_safe_float(0.5, Width::W32));
/// assert!(!is_safe_float(0.1, Width::W32));
/// assert!(is_safe_float(0.1, Width::W64));
/// assert!(is_safe_float(f64::NAN, Width::W32));
/// assert!(is_safe_float(f64::INFINITY, Width::W32));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn is_safe_float(value: f64, bits: Width) -> bool {
    if value.is_nan() || value.is_infinite() {
        return true;
    }
    if bits.bits() <= 32 && value != 0.0 {
        return f64::from(value as f32).to_bits() == value.to_bits();
    }

    true
}

/// Checks whether a signed integer is exactly representable as a float of
/// `bits` width.
///
/// The magnitude may use at most as many bits as the float's significand:
/// 24 for `f32`, 53 for `f64`.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_int_to_float, value::shape::Width};
///
/// assert!(is_safe_int_to_float(16_777_215, Width::W32));
/// assert!(!is_safe_int_to_float(16_777_216, Width::W32));
/// assert!(is_safe_int_to_float(-9_007_199_254_740_991, Width::W64));
/// assert!(!is_safe_int_to_float(i64::MIN, Width::W64));
/// ```
#[must_use]
pub const fn is_safe_int_to_float(value: i64, bits: Width) -> bool {
    bit_length(value.unsigned_abs()) <= mantissa_bits(bits)
}

/// Checks whether an unsigned integer is exactly representable as a float of
/// `bits` width.
#[must_use]
pub const fn is_safe_uint_to_float(value: u64, bits: Width) -> bool {
    bit_length(value) <= mantissa_bits(bits)
}

/// Checks whether a float converts exactly to a signed integer.
///
/// The value must be integral, must lie inside the range where the source
/// float still represents every integer (below `2^24` for `f32`, `2^53` for
/// `f64`), and must fit the target integer width. NaN and the infinities are
/// never safe.
///
/// ## Parameters
/// - `value`: The float, widened to `f64`.
/// - `float_bits`: Width of the float the value came from.
/// - `int_bits`: Width of the target integer.
///
/// ## Example
/// ```
/// use exactcast::{util::num::is_safe_float_to_int, value::shape::Width};
///
/// assert!(is_safe_float_to_int(3.0, Width::W64, Width::W64));
/// assert!(!is_safe_float_to_int(3.5, Width::W64, Width::W64));
/// assert!(!is_safe_float_to_int(200.0, Width::W64, Width::W8));
/// assert!(!is_safe_float_to_int(f64::INFINITY, Width::W64, Width::W64));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn is_safe_float_to_int(value: f64, float_bits: Width, int_bits: Width) -> bool {
    if !is_exact_integer(value, float_bits) {
        return false;
    }

    is_safe_int(value as i64, int_bits)
}

/// Checks whether a float converts exactly to an unsigned integer.
///
/// Same rules as [`is_safe_float_to_int`], and the value must not be
/// negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn is_safe_float_to_uint(value: f64, float_bits: Width, uint_bits: Width) -> bool {
    if value < 0.0 || !is_exact_integer(value, float_bits) {
        return false;
    }

    is_safe_uint(value as u64, uint_bits)
}

/// Checks whether a complex number survives narrowing to components of
/// `bits` width.
///
/// ## Example
/// ```
/// use exactcast::{
///     util::num::is_safe_complex,
///     value::{complex::Complex128, shape::Width},
/// };
///
/// assert!(is_safe_complex(Complex128::new(0.5, -0.25), Width::W32));
/// assert!(!is_safe_complex(Complex128::new(0.5, 0.1), Width::W32));
/// ```
#[must_use]
pub fn is_safe_complex(value: Complex128, bits: Width) -> bool {
    is_safe_float(value.real, bits) && is_safe_float(value.imaginary, bits)
}

/// Checks whether a complex number converts exactly to a float.
///
/// The imaginary part must be exactly zero, so a NaN imaginary part is never
/// safe.
///
/// ## Example
/// ```
/// use exactcast::{
///     util::num::is_safe_complex_to_float,
///     value::{complex::Complex128, shape::Width},
/// };
///
/// assert!(is_safe_complex_to_float(Complex128::new(5.0, 0.0), Width::W64));
/// assert!(!is_safe_complex_to_float(Complex128::new(5.0, 0.0001), Width::W64));
/// ```
#[must_use]
pub fn is_safe_complex_to_float(value: Complex128, bits: Width) -> bool {
    is_safe_float(value.real, bits) && value.is_real()
}

/// Checks whether a complex number converts exactly to a signed integer.
#[must_use]
pub fn is_safe_complex_to_int(value: Complex128, float_bits: Width, int_bits: Width) -> bool {
    is_safe_float_to_int(value.real, float_bits, int_bits) && value.is_real()
}

/// Checks whether a complex number converts exactly to an unsigned integer.
#[must_use]
pub fn is_safe_complex_to_uint(value: Complex128, float_bits: Width, uint_bits: Width) -> bool {
    is_safe_float_to_uint(value.real, float_bits, uint_bits) && value.is_real()
}

/// Wraps a signed integer to `bits` width using two's complement.
///
/// This is the best-effort value reported next to an unsafe conversion.
///
/// ## Example
/// ```
/// use exactcast::{util::num::wrap_int, value::shape::Width};
///
/// assert_eq!(wrap_int(200, Width::W8), -56);
/// assert_eq!(wrap_int(-1, Width::W64), -1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn wrap_int(value: i64, bits: Width) -> i64 {
    match bits {
        Width::W8 => value as i8 as i64,
        Width::W16 => value as i16 as i64,
        Width::W32 => value as i32 as i64,
        Width::W64 => value,
    }
}

/// Truncates an unsigned integer to `bits` width.
///
/// ## Example
/// ```
/// use exactcast::{util::num::wrap_uint, value::shape::Width};
///
/// assert_eq!(wrap_uint(300, Width::W8), 44);
/// ```
#[must_use]
pub const fn wrap_uint(value: u64, bits: Width) -> u64 {
    value & uint_max(bits)
}

/// Rounds a float to the precision of a float of `bits` width.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn narrow_float(value: f64, bits: Width) -> f64 {
    if bits.bits() <= 32 { f64::from(value as f32) } else { value }
}

/// Number of bits needed to write `value` in binary.
const fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Returns `true` if `value` is finite, integral, and small enough that the
/// float of `float_bits` width represents it and all its neighbours exactly.
#[allow(clippy::cast_possible_wrap)]
fn is_exact_integer(value: f64, float_bits: Width) -> bool {
    if !value.is_finite() || value.trunc() != value {
        return false;
    }

    // frexp exponent <= mantissa bits  <=>  |value| < 2^mantissa
    value.abs() < 2f64.powi(mantissa_bits(float_bits) as i32)
}
