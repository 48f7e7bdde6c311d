use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::ConvertError,
    value::{complex::Complex128, core::Value, shape::NumericShape, shape::Width},
};

/// Digits used for every radix up to 36.
const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest base accepted by [`format_int`] and [`format_uint`].
pub const MIN_BASE: u32 = 2;
/// Largest base accepted by [`format_int`] and [`format_uint`].
pub const MAX_BASE: u32 = 36;
/// Largest precision [`FormatOptions`] accepts, `i32::MAX`.
pub const MAX_PRECISION: usize = 2_147_483_647;

/// How a float is written out.
///
/// Each variant corresponds to one format character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum FloatFormat {
    /// `b`: binary exponent, `-ddddp±ddd`.
    Binary,
    /// `e`: decimal exponent, `-d.dddde±dd`.
    Exponent,
    /// `E`: decimal exponent, `-d.ddddE±dd`.
    ExponentUpper,
    /// `f`: no exponent, `-ddd.dddd`.
    Fixed,
    /// `g`: `e` for large exponents, `f` otherwise.
    #[default]
    General,
    /// `G`: `E` for large exponents, `f` otherwise.
    GeneralUpper,
}

impl TryFrom<char> for FloatFormat {
    type Error = ConvertError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'b' => Ok(Self::Binary),
            'e' => Ok(Self::Exponent),
            'E' => Ok(Self::ExponentUpper),
            'f' => Ok(Self::Fixed),
            'g' => Ok(Self::General),
            'G' => Ok(Self::GeneralUpper),
            _ => Err(ConvertError::invalid_argument(format!("'{c}' is not a float format"))),
        }
    }
}

impl From<FloatFormat> for char {
    fn from(format: FloatFormat) -> Self {
        match format {
            FloatFormat::Binary => 'b',
            FloatFormat::Exponent => 'e',
            FloatFormat::ExponentUpper => 'E',
            FloatFormat::Fixed => 'f',
            FloatFormat::General => 'g',
            FloatFormat::GeneralUpper => 'G',
        }
    }
}

impl Display for FloatFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Options for rendering a value as text.
///
/// `base` applies to integers, `format` and `precision` to floats. Complex
/// numbers ignore all three.
///
/// # Example
/// ```
/// use exactcast::grammar::format::{FloatFormat, FormatOptions};
///
/// let options = FormatOptions::new(16, 'e', 3).unwrap();
/// assert_eq!(options.base, 16);
/// assert_eq!(options.format, FloatFormat::Exponent);
/// assert_eq!(options.precision, Some(3));
///
/// assert_eq!(FormatOptions::new(10, 'g', -1).unwrap(), FormatOptions::default());
/// assert!(FormatOptions::new(37, 'g', -1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Integer base, `2..=36`.
    pub base:      u32,
    /// Float format.
    pub format:    FloatFormat,
    /// Digits after the point (`e`, `f`) or significant digits (`g`);
    /// `None` selects the shortest text that reads back to the same value.
    pub precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { base:      10,
               format:    FloatFormat::General,
               precision: None, }
    }
}

impl FormatOptions {
    /// Builds options from a base, a format character and a precision, where
    /// any negative precision means shortest.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidArgument` if `base` is outside `2..=36` or
    /// `format` is not one of `b`, `e`, `E`, `f`, `g`, `G`.
    pub fn new(base: u32, format: char, precision: i32) -> Result<Self, ConvertError> {
        let options = Self { base,
                             format: FloatFormat::try_from(format)?,
                             precision: usize::try_from(precision).ok() };
        options.validate()?;

        Ok(options)
    }

    /// Checks that the base and the precision are usable.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidArgument` if `base` is outside `2..=36` or
    /// `precision` exceeds [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.base) {
            return Err(ConvertError::invalid_argument(format!("base {} is outside \
                                                               {MIN_BASE}..={MAX_BASE}",
                                                              self.base)));
        }

        match self.precision {
            Some(p) if p > MAX_PRECISION => {
                Err(ConvertError::invalid_argument(format!("precision {p} exceeds \
                                                            {MAX_PRECISION}")))
            },
            _ => Ok(()),
        }
    }
}

/// Formats an unsigned integer in `base`.
///
/// Bases outside `2..=36` are clamped into that range.
///
/// # Example
/// ```
/// use exactcast::grammar::format::format_uint;
///
/// assert_eq!(format_uint(255, 16), "ff");
/// assert_eq!(format_uint(35, 36), "z");
/// assert_eq!(format_uint(0, 2), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_uint(value: u64, base: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let base = u64::from(base.clamp(MIN_BASE, MAX_BASE));
    let mut digits = Vec::with_capacity(64);
    let mut rest = value;

    while rest > 0 {
        digits.push(RADIX_DIGITS[(rest % base) as usize]);
        rest /= base;
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Formats a signed integer in `base`, with a leading `-` when negative.
///
/// # Example
/// ```
/// use exactcast::grammar::format::format_int;
///
/// assert_eq!(format_int(42, 10), "42");
/// assert_eq!(format_int(-255, 16), "-ff");
/// assert_eq!(format_int(i64::MIN, 10), "-9223372036854775808");
/// ```
#[must_use]
pub fn format_int(value: i64, base: u32) -> String {
    let magnitude = format_uint(value.unsigned_abs(), base);

    if value < 0 { format!("-{magnitude}") } else { magnitude }
}

/// Decimal digits of a float: `0.d₁d₂… × 10^point`, without trailing zeros.
/// Zero has no digits and `point == 0`.
struct Digits {
    digits: Vec<u8>,
    point:  i32,
}

impl Digits {
    /// Reads the digits out of Rust's `{:e}` rendering of a non-negative
    /// float.
    fn from_scientific(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while digits.last() == Some(&b'0') {
            digits.pop();
        }

        if digits.is_empty() {
            return Self { digits,
                          point: 0 };
        }

        Self { digits,
               point: exponent + 1 }
    }

    /// The shortest digits that read back to the same float of `bits` width.
    #[allow(clippy::cast_possible_truncation)]
    fn shortest(magnitude: f64, bits: Width) -> Self {
        if bits.bits() <= 32 {
            Self::from_scientific(&format!("{:e}", magnitude as f32))
        } else {
            Self::from_scientific(&format!("{magnitude:e}"))
        }
    }

    /// The value correctly rounded to `significant` digits.
    #[allow(clippy::cast_possible_truncation)]
    fn rounded(magnitude: f64, bits: Width, significant: usize) -> Self {
        let after_point = significant.saturating_sub(1);

        if bits.bits() <= 32 {
            Self::from_scientific(&format!("{:.*e}", after_point, magnitude as f32))
        } else {
            Self::from_scientific(&format!("{magnitude:.after_point$e}"))
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn len(&self) -> i32 {
        self.digits.len() as i32
    }

    /// Digit at `index`, or `'0'` outside the stored digits.
    #[allow(clippy::cast_sign_loss)]
    fn at(&self, index: i32) -> char {
        if index >= 0 && index < self.len() {
            char::from(self.digits[index as usize])
        } else {
            '0'
        }
    }

    /// `d.ddde±dd` with `precision` digits after the point.
    fn exponent(&self, out: &mut String, precision: usize, upper: bool) {
        out.push(self.at(0));

        if precision > 0 {
            out.push('.');
            for index in 1..=precision {
                out.push(self.at(i32::try_from(index).unwrap_or(i32::MAX)));
            }
        }

        out.push(if upper { 'E' } else { 'e' });

        let exponent = if self.digits.is_empty() { 0 } else { self.point - 1 };
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    }

    /// `ddd.ddd` with `precision` digits after the point.
    fn fixed(&self, out: &mut String, precision: usize) {
        if self.point > 0 {
            for index in 0..self.point {
                out.push(self.at(index));
            }
        } else {
            out.push('0');
        }

        if precision > 0 {
            out.push('.');
            for index in 1..=precision {
                let offset = i32::try_from(index).unwrap_or(i32::MAX);
                out.push(self.at(self.point.saturating_add(offset) - 1));
            }
        }
    }
}

/// Formats a float of `bits` width.
///
/// The output matches the conventions of Go's `strconv.FormatFloat`: special
/// values are `NaN`, `+Inf` and `-Inf`, exponents carry a sign and at least
/// two digits, and `g` switches to exponent form when the decimal exponent is
/// below `-4` or at least the precision (6 when shortest).
///
/// At 32 bits the value is first rounded to `f32`, so shortest output is the
/// shortest text for the `f32`.
///
/// # Example
/// ```
/// use exactcast::{
///     grammar::format::{FloatFormat, format_float},
///     value::shape::Width,
/// };
///
/// assert_eq!(format_float(3.14159, FloatFormat::Fixed, Some(2), Width::W64), "3.14");
/// assert_eq!(format_float(1e6, FloatFormat::General, None, Width::W64), "1e+06");
/// assert_eq!(format_float(0.1, FloatFormat::General, None, Width::W32), "0.1");
/// assert_eq!(format_float(1.5, FloatFormat::Exponent, Some(3), Width::W64), "1.500e+00");
/// assert_eq!(format_float(f64::NEG_INFINITY, FloatFormat::General, None, Width::W64), "-Inf");
/// ```
#[must_use]
pub fn format_float(value: f64, format: FloatFormat, precision: Option<usize>, bits: Width)
                    -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if format == FloatFormat::Binary {
        return format_binary(value, bits);
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let magnitude = value.abs();

    match format {
        FloatFormat::Exponent | FloatFormat::ExponentUpper => {
            let upper = format == FloatFormat::ExponentUpper;
            match precision {
                Some(p) => {
                    Digits::rounded(magnitude, bits, p.saturating_add(1)).exponent(&mut out,
                                                                                    p,
                                                                                    upper);
                },
                None => {
                    let digits = Digits::shortest(magnitude, bits);
                    let p = digits.digits.len().saturating_sub(1);
                    digits.exponent(&mut out, p, upper);
                },
            }
        },
        FloatFormat::Fixed => match precision {
            Some(p) => out.push_str(&fixed(magnitude, bits, p)),
            None => {
                let digits = Digits::shortest(magnitude, bits);
                let p = usize::try_from(digits.len() - digits.point).unwrap_or(0);
                digits.fixed(&mut out, p);
            },
        },
        FloatFormat::General | FloatFormat::GeneralUpper => {
            general(&mut out, magnitude, precision, bits, format == FloatFormat::GeneralUpper);
        },
        FloatFormat::Binary => {},
    }

    out
}

/// `f` with an explicit precision, rounded from the exact binary value.
#[allow(clippy::cast_possible_truncation)]
fn fixed(magnitude: f64, bits: Width, precision: usize) -> String {
    if bits.bits() <= 32 {
        format!("{:.*}", precision, magnitude as f32)
    } else {
        format!("{magnitude:.precision$}")
    }
}

/// `g`: exponent form for very small or large exponents, fixed otherwise.
fn general(out: &mut String, magnitude: f64, precision: Option<usize>, bits: Width, upper: bool) {
    let (digits, eprec) = match precision {
        None => (Digits::shortest(magnitude, bits), 6),
        Some(p) => {
            let p = p.max(1);
            let digits = Digits::rounded(magnitude, bits, p);
            let mut eprec = i32::try_from(p).unwrap_or(i32::MAX);
            if eprec > digits.len() && digits.len() >= digits.point {
                eprec = digits.len();
            }
            (digits, eprec)
        },
    };

    let exponent = digits.point - 1;
    if exponent < -4 || exponent >= eprec {
        let p = usize::try_from(digits.len() - 1).unwrap_or(0);
        digits.exponent(out, p, upper);
    } else {
        let p = usize::try_from((digits.len() - digits.point).max(0)).unwrap_or(0);
        digits.fixed(out, p);
    }
}

/// `b`: the integer significand and the binary exponent, `mantp±exp`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn format_binary(value: f64, bits: Width) -> String {
    let (negative, mantissa, exponent) = if bits.bits() <= 32 {
        let raw = (value as f32).to_bits();
        let biased = ((raw >> 23) & 0xff) as i32;
        let mut mantissa = u64::from(raw & 0x007f_ffff);
        let biased = if biased == 0 {
            1
        } else {
            mantissa |= 1 << 23;
            biased
        };
        (raw >> 31 == 1, mantissa, biased - 127 - 23)
    } else {
        let raw = value.to_bits();
        let biased = ((raw >> 52) & 0x7ff) as i32;
        let mut mantissa = raw & 0x000f_ffff_ffff_ffff;
        let biased = if biased == 0 {
            1
        } else {
            mantissa |= 1 << 52;
            biased
        };
        (raw >> 63 == 1, mantissa, biased - 1023 - 52)
    };

    let sign = if negative { "-" } else { "" };
    format!("{sign}{mantissa}p{exponent:+}")
}

/// Formats a complex number as `(re±imi)`, each part in shortest `g` form.
///
/// # Example
/// ```
/// use exactcast::{
///     grammar::format::format_complex,
///     value::{complex::Complex128, shape::Width},
/// };
///
/// assert_eq!(format_complex(Complex128::new(3.0, 4.0), Width::W64), "(3+4i)");
/// assert_eq!(format_complex(Complex128::new(1.5, -2.0), Width::W64), "(1.5-2i)");
/// assert_eq!(format_complex(Complex128::new(0.0, f64::NAN), Width::W64), "(0+NaNi)");
/// ```
#[must_use]
pub fn format_complex(value: Complex128, bits: Width) -> String {
    let real = format_float(value.real, FloatFormat::General, None, bits);
    let imaginary = format_float(value.imaginary, FloatFormat::General, None, bits);

    if imaginary.starts_with(['+', '-']) {
        format!("({real}{imaginary}i)")
    } else {
        format!("({real}+{imaginary}i)")
    }
}

/// Formats a resolved numeric or boolean value.
///
/// Integers use `options.base`, floats use `options.format` and
/// `options.precision`, complex numbers are always `(re±imi)` and booleans
/// `true` or `false`. Returns `None` for strings and every other shape.
///
/// # Example
/// ```
/// use exactcast::{
///     grammar::format::{FormatOptions, format},
///     value::core::Value,
/// };
///
/// let options = FormatOptions::new(10, 'g', -1).unwrap();
/// assert_eq!(format(&Value::Int64(42), &options).as_deref(), Some("42"));
///
/// let options = FormatOptions::new(10, 'f', 2).unwrap();
/// assert_eq!(format(&Value::Float64(3.14), &options).as_deref(), Some("3.14"));
///
/// assert_eq!(format(&Value::from("text"), &options), None);
/// ```
#[must_use]
pub fn format(value: &Value, options: &FormatOptions) -> Option<String> {
    match value.shape() {
        NumericShape::SignedInt(_) => value.as_i64().map(|v| format_int(v, options.base)),
        NumericShape::UnsignedInt(_) => value.as_u64().map(|v| format_uint(v, options.base)),
        NumericShape::Float(bits) => {
            value.as_f64()
                 .map(|v| format_float(v, options.format, options.precision, bits))
        },
        NumericShape::Complex(bits) => value.as_complex().map(|c| format_complex(c, bits)),
        NumericShape::Bool => match value {
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        },
        NumericShape::String | NumericShape::Other => None,
    }
}
