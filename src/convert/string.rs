use crate::{
    convert::core::{TRACE_TARGET, resolve},
    grammar::format::{FormatOptions, format},
    outcome::ConversionOutcome,
    value::core::{Scalar, Value},
};

/// Converts a value to its text form.
///
/// Strings are copied; numbers and booleans are rendered with
/// [`format`](crate::grammar::format::format) under `options`; anything else
/// falls back to the value's `Display` dump. Only a nil source or an invalid
/// base fails.
///
/// # Example
/// ```
/// use exactcast::{
///     convert::to_string,
///     grammar::format::FormatOptions,
///     value::core::Value,
/// };
///
/// let hex = FormatOptions::new(16, 'g', -1).unwrap();
/// assert_eq!(to_string(&Value::Uint32(255), &hex).value().map(String::as_str), Some("ff"));
///
/// let list = Value::Array(vec![Value::Int8(1), Value::from("a")]);
/// assert_eq!(to_string(&list, &FormatOptions::default()).value().map(String::as_str),
///            Some("[1, a]"));
/// ```
pub fn to_string(value: &Value, options: &FormatOptions) -> ConversionOutcome<String> {
    if let Err(error) = options.validate() {
        tracing::debug!(target: TRACE_TARGET, %error, "invalid format options");
        return ConversionOutcome::failed(error);
    }
    let source = match resolve(value) {
        Ok(source) => source,
        Err(outcome) => return outcome,
    };

    match source.scalar() {
        Scalar::Text(text) => ConversionOutcome::exact(text.to_string()),
        Scalar::Other(other) => ConversionOutcome::exact(other.to_string()),
        _ => ConversionOutcome::exact(format(source, options).unwrap_or_else(|| source.to_string())),
    }
}
