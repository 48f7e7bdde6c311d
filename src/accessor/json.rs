use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    accessor::{
        core::{Accessor, Nullability},
        element::Element,
    },
    convert::core::TRACE_TARGET,
    error::ConvertError,
    outcome::ConversionOutcome,
    value::{
        core::Value,
        shape::{NumericShape, Width},
    },
};

/// Imports a decoded JSON value into an element of shape `T::SHAPE`.
///
/// Numeric elements only accept JSON numbers, booleans only JSON booleans,
/// and strings and complex numbers only JSON strings. A fractional number
/// for a 32-bit float is read at `f32` precision.
#[allow(clippy::cast_possible_truncation)]
fn decode<T: Element>(json: serde_json::Value) -> ConversionOutcome<T> {
    let accepted = match T::SHAPE {
        NumericShape::SignedInt(_) | NumericShape::UnsignedInt(_) | NumericShape::Float(_) => {
            json.is_number()
        },
        NumericShape::Complex(_) | NumericShape::String => json.is_string(),
        NumericShape::Bool => json.is_boolean(),
        NumericShape::Other => false,
    };

    let value = match json {
        serde_json::Value::Null => return ConversionOutcome::absent(),
        json => Value::from(json),
    };

    if !accepted {
        let (from, to) = (value.shape(), T::SHAPE);
        let error = ConvertError::convert(from, to, format!("JSON {from} where {to} was expected"));
        tracing::debug!(target: TRACE_TARGET, %from, %to, %error, "wrong JSON type");
        return ConversionOutcome::failed(error);
    }

    match &value {
        Value::Float64(r) if T::SHAPE == NumericShape::Float(Width::W32) => {
            let narrowed = *r as f32;
            if narrowed.is_finite() {
                T::convert(&Value::Float32(narrowed))
            } else {
                T::convert(&value)
            }
        },
        _ => T::convert(&value),
    }
}

impl<T: Element, N: Nullability> Serialize for Accessor<T, N> {
    /// Nullable accessors write `null` when absent or invalid; non-nullable
    /// accessors always write [`Accessor::v`].
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if N::NULLABLE && (!self.valid() || !self.present()) {
            return serializer.serialize_none();
        }

        self.v().serialize(serializer)
    }
}

impl<'de, T: Element, N: Nullability> Deserialize<'de> for Accessor<T, N> {
    /// `null` decodes to an absent accessor. A JSON value of the element's
    /// type goes through the dispatcher; any other type, or a conversion
    /// error, fails the decode.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;

        let accessor = Self::from_outcome(decode(json));
        match accessor.err() {
            Some(error) => Err(de::Error::custom(error)),
            None => Ok(accessor),
        }
    }
}

impl<T: Element, N: Nullability> Accessor<T, N> {
    /// Encodes the accessor as JSON text.
    ///
    /// # Errors
    /// Returns `ConvertError::UnexpectedValue` if the encoder fails.
    ///
    /// # Example
    /// ```
    /// use exactcast::{
    ///     accessor::element::{Int8, NullInt8},
    ///     value::core::Value,
    /// };
    ///
    /// let invalid = Value::Int64(200);
    /// assert_eq!(NullInt8::from_value(&invalid).to_json().unwrap(), "null");
    /// assert_eq!(Int8::from_value(&invalid).to_json().unwrap(), "-56");
    /// assert_eq!(NullInt8::new(5).to_json().unwrap(), "5");
    /// ```
    pub fn to_json(&self) -> Result<String, ConvertError> {
        serde_json::to_string(self).map_err(|e| ConvertError::unexpected(e.to_string()))
    }

    /// Decodes JSON text into this accessor.
    ///
    /// Unlike [`Deserialize`], the outcome of the conversion is stored even
    /// when it failed, so a best-effort value survives next to its error.
    ///
    /// # Errors
    /// - `ConvertError::UnexpectedValue` if the text is not JSON.
    /// - `ConvertError::Convert` if the JSON value has the wrong type for the
    ///   element.
    /// - The conversion's error if the decoded value does not convert
    ///   exactly.
    ///
    /// # Example
    /// ```
    /// use exactcast::accessor::element::NullUint16;
    ///
    /// let mut accessor = NullUint16::default();
    /// accessor.unmarshal_json("16").unwrap();
    /// assert_eq!(accessor.v(), 16);
    ///
    /// accessor.unmarshal_json("null").unwrap();
    /// assert!(!accessor.present());
    ///
    /// assert!(accessor.unmarshal_json("70000").is_err());
    /// assert_eq!(accessor.v(), 4464);
    ///
    /// assert!(accessor.unmarshal_json("\"16\"").is_err());
    /// assert!(!accessor.present());
    /// ```
    pub fn unmarshal_json(&mut self, text: &str) -> Result<(), ConvertError> {
        let json: serde_json::Value = match serde_json::from_str(text) {
            Ok(json) => json,
            Err(e) => {
                let error = ConvertError::unexpected(e.to_string());
                *self = Self::failed(error.clone());
                return Err(error);
            },
        };

        *self = Self::from_outcome(decode(json));

        match self.err() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
