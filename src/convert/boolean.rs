use serde::{Deserialize, Serialize};

use crate::{
    convert::core::{TRACE_TARGET, resolve},
    error::ConvertError,
    outcome::ConversionOutcome,
    value::core::{Scalar, Value},
};

/// Options for [`to_bool`].
///
/// # Example
/// ```
/// use exactcast::convert::BoolOptions;
///
/// let options: BoolOptions = serde_json::from_str(r#"{"humanize": true}"#).unwrap();
/// assert_eq!(options, BoolOptions::HUMANIZED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOptions {
    /// Only strictly positive numbers and non-empty collections are `true`.
    pub positive_only: bool,
    /// Strings must spell `true`, `1`, `false` or `0`.
    pub humanize:      bool,
}

impl BoolOptions {
    /// The options used by boolean accessors: human spellings, any nonzero
    /// number is `true`.
    pub const HUMANIZED: Self = Self { positive_only: false,
                                       humanize:      true, };
}

/// Converts a value to a boolean.
///
/// - Booleans are copied.
/// - Strings with `humanize` must be `true`, `1`, `false` or `0` in any
///   letter case, otherwise the result is an `UnexpectedValue` error with no
///   value. Without `humanize` any non-empty string is `true`.
/// - Numbers are `true` when nonzero, or when strictly positive with
///   `positive_only`. Complex numbers are judged by their real part.
/// - Arrays, maps and byte strings with `positive_only` are `true` when
///   non-empty.
/// - Everything else is `true` unless it is its type's zero value.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::{BoolOptions, to_bool},
///     value::core::Value,
/// };
///
/// let positive = BoolOptions { positive_only: true,
///                              ..BoolOptions::default() };
///
/// assert_eq!(to_bool(&Value::Int8(-1), BoolOptions::default()).value(), Some(&true));
/// assert_eq!(to_bool(&Value::Int8(-1), positive).value(), Some(&false));
/// assert_eq!(to_bool(&Value::from("TRUE"), BoolOptions::HUMANIZED).value(), Some(&true));
/// assert!(to_bool(&Value::from("yes"), BoolOptions::HUMANIZED).value().is_none());
/// ```
pub fn to_bool(value: &Value, options: BoolOptions) -> ConversionOutcome<bool> {
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    let truth = match source.scalar() {
        Scalar::Bool(b) => b,
        Scalar::Text(text) if options.humanize => match humanized(text) {
            Some(b) => b,
            None => {
                let error = ConvertError::unexpected(format!("'{text}' is not a boolean"));
                tracing::debug!(target: TRACE_TARGET, %error, "unrecognized boolean text");
                return ConversionOutcome::failed(error);
            },
        },
        Scalar::Text(text) => !text.is_empty(),
        Scalar::Int(v, _) => if options.positive_only { v > 0 } else { v != 0 },
        Scalar::Uint(v, _) => if options.positive_only { v > 0 } else { v != 0 },
        Scalar::Float(v, _) => if options.positive_only { v > 0.0 } else { v != 0.0 },
        Scalar::Complex(c, _) => {
            if options.positive_only { c.real > 0.0 } else { c.real != 0.0 }
        },
        Scalar::Other(other) => match other.len() {
            Some(len) if options.positive_only => len > 0,
            _ => !other.is_zero(),
        },
    };

    ConversionOutcome::exact(truth)
}

/// Reads the four human spellings of a boolean.
fn humanized(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}
