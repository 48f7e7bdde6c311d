use thiserror::Error;

/// Represents all errors that can occur while reading numeric text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiteralError {
    /// The text is not a literal of the requested kind.
    #[error("invalid syntax in literal '{text}'")]
    Syntax {
        /// The rejected text.
        text: String,
    },
    /// The literal is well formed but does not fit the requested width.
    #[error("literal '{text}' is out of range")]
    Range {
        /// The rejected text.
        text:        String,
        /// The closest representable value: the clamped bound for integers,
        /// a signed infinity for floats.
        best_effort: f64,
    },
}

impl LiteralError {
    pub(crate) fn syntax(text: &str) -> Self {
        Self::Syntax { text: text.to_string() }
    }

    pub(crate) fn range(text: &str, best_effort: f64) -> Self {
        Self::Range { text: text.to_string(),
                      best_effort }
    }

    /// Returns the closest representable value for a range error.
    #[must_use]
    pub const fn best_effort(&self) -> Option<f64> {
        match self {
            Self::Syntax { .. } => None,
            Self::Range { best_effort, .. } => Some(*best_effort),
        }
    }

    /// Returns the rejected text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Syntax { text } | Self::Range { text, .. } => text,
        }
    }
}
