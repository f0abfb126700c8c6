//! Tagged scalar values carried by survey fields.
//!
//! The variant is decided once, when a raw value is read off the wire,
//! and travels unchanged to the encoder. An unquoted raw value that is
//! a valid JSON number literal becomes [`Scalar::Number`]; everything
//! else becomes [`Scalar::String`].
//!
//! Numbers keep the exact text the client sent. `1.50`, `1e2`, `-0` and
//! integers beyond 64 bits are echoed back verbatim, never re-rendered
//! through a float.

use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::value::RawValue;

/// A syntactically valid JSON number, stored as its original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral(String);

impl NumberLiteral {
    /// Accept `raw` if it is exactly one JSON number literal.
    ///
    /// Only the grammar is checked; there is no range limit.
    pub fn parse(raw: &str) -> Option<Self> {
        let numeric_start = raw.starts_with(|c: char| c == '-' || c.is_ascii_digit());
        (numeric_start && serde_json::from_str::<&RawValue>(raw).is_ok())
            .then(|| Self(raw.to_owned()))
    }
}

impl Serialize for NumberLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw: &RawValue = serde_json::from_str(&self.0).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl core::fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for NumberLiteral {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// A single field value: either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A numeric literal, rendered without quotes.
    Number(NumberLiteral),
    /// Any other value, rendered as a quoted string.
    String(String),
}

impl Scalar {
    /// Classify a trimmed raw value taken from a request body.
    ///
    /// Quoted values are always strings, so `"30"` stays a string while
    /// `30` becomes a number. Every literal `"` is removed from string
    /// values, not only the surrounding pair.
    pub fn from_raw(raw: &str) -> Self {
        if !raw.contains('"') {
            if let Some(number) = NumberLiteral::parse(raw) {
                return Self::Number(number);
            }
        }
        Self::String(raw.replace('"', ""))
    }

    /// Whether this value is numeric.
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(NumberLiteral::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(NumberLiteral::from(value))
    }
}
