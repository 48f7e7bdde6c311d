use crate::{
    error::{ConvertError, LiteralError},
    outcome::ConversionOutcome,
    value::{core::Value, shape::NumericShape},
};

/// `tracing` target of every event the conversion functions emit.
pub const TRACE_TARGET: &str = "exactcast::convert";

/// Follows the source's references, or fails the whole conversion.
///
/// # Errors
/// Returns a failed outcome carrying `ConvertError::InvalidArgument` if the
/// source is nil or too deeply nested.
pub(crate) fn resolve<T>(value: &Value) -> Result<&Value, ConversionOutcome<T>> {
    value.resolve().map_err(|error| {
                       tracing::debug!(target: TRACE_TARGET, %error, "source did not resolve");
                       ConversionOutcome::failed(error)
                   })
}

/// Wraps a best-effort value, attaching a `Convert` error when `safe` is
/// `false`.
pub(crate) fn checked<T>(value: T, safe: bool, source: &Value, to: NumericShape)
                         -> ConversionOutcome<T> {
    if safe {
        return ConversionOutcome::exact(value);
    }

    let from = source.shape();
    let error = ConvertError::convert(from, to, format!("{source} is not exactly representable"));
    tracing::debug!(target: TRACE_TARGET, %from, %to, %error, "inexact conversion");

    ConversionOutcome::lossy(value, error)
}

/// A string source that is not a literal of the target shape.
pub(crate) fn unparseable<T>(error: &LiteralError, to: NumericShape) -> ConversionOutcome<T> {
    let error = ConvertError::convert(NumericShape::String, to, error.to_string());
    tracing::debug!(target: TRACE_TARGET, from = %NumericShape::String, %to, %error,
                    "unparseable string");

    ConversionOutcome::failed(error)
}

/// A source shape the target cannot be built from.
pub(crate) fn unsupported<T>(source: &Value, to: NumericShape) -> ConversionOutcome<T> {
    let from = source.shape();
    let error = ConvertError::convert(from, to, "unsupported source type");
    tracing::debug!(target: TRACE_TARGET, %from, %to, %error, "unsupported conversion");

    ConversionOutcome::failed(error)
}

/// A target shape the called function does not produce.
pub(crate) fn wrong_target<T>(source: &Value, to: NumericShape, expected: &str)
                              -> ConversionOutcome<T> {
    ConversionOutcome::failed(ConvertError::convert(NumericShape::of(source),
                                                    to,
                                                    format!("target is not a valid {expected} \
                                                             shape")))
}
