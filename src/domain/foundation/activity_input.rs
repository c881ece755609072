//! ActivityInput value object: one user-entered monthly quantity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monthly activity quantity as it arrives from a form field.
///
/// The raw text is kept until calculation time. JSON callers may send a
/// string, a number or `null`; all three end up here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityInput(Option<String>);

/// Outcome of parsing an [`ActivityInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedQuantity {
    /// Nothing entered (missing, empty or whitespace only).
    Absent,
    /// A finite number. Negative values are passed through untouched.
    Quantity(f64),
    /// Something was entered but it is not a finite number.
    Unparseable,
}

impl ActivityInput {
    /// An empty field.
    pub fn blank() -> Self {
        Self(None)
    }

    /// A field holding the given text.
    pub fn text(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    /// A field holding a number.
    pub fn number(value: f64) -> Self {
        Self(Some(value.to_string()))
    }

    /// Returns the raw text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns true when nothing was entered.
    pub fn is_blank(&self) -> bool {
        matches!(self.parse(), ParsedQuantity::Absent)
    }

    /// Parses the field.
    pub fn parse(&self) -> ParsedQuantity {
        let Some(raw) = self.0.as_deref() else {
            return ParsedQuantity::Absent;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParsedQuantity::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => ParsedQuantity::Quantity(value),
            _ => ParsedQuantity::Unparseable,
        }
    }
}

impl From<&str> for ActivityInput {
    fn from(raw: &str) -> Self {
        Self::text(raw)
    }
}

impl From<f64> for ActivityInput {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawActivityInput {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ActivityInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawActivityInput>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::blank(),
            Some(RawActivityInput::Number(value)) => Self::number(value),
            Some(RawActivityInput::Text(text)) => Self::text(text),
        })
    }
}

impl Serialize for ActivityInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
