//! ID type wrappers for type safety.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Common impls for string-backed identifier wrappers.
macro_rules! impl_string_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }

                /// Blank ids are a caller defect, never a valid key.
                pub fn is_blank(&self) -> bool {
                    self.0.trim().is_empty()
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<String> for $name {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }

            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    Self(s.to_string())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

/// Identifier of a saved vehicle as held by the user.
///
/// Either a 24-character hex key issued by the inventory API or an
/// arbitrary slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

/// Owner key for a list of saved favorites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl_string_id!(VehicleId, UserId);

impl UserId {
    /// Whether the id is safe to use as a storage key (file stem).
    pub fn is_valid_key(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

/// Identifier as carried inside a record.
///
/// Data sources disagree on the representation: the inventory API emits
/// string keys while the bundled sample data uses plain integers. Integral
/// floats (`42.0`) are read as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string or an integral number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordId, E> {
        Ok(RecordId::Numeric(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordId, E> {
        i64::try_from(v)
            .map(RecordId::Numeric)
            .map_err(|_| E::custom(format!("record id {v} out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RecordId, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
            Ok(RecordId::Numeric(v as i64))
        } else {
            Err(E::custom(format!("record id {v} is not an integer")))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
        Ok(RecordId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RecordId, E> {
        Ok(RecordId::Text(v))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}

impl RecordId {
    /// Returns true if this record id refers to the given reference.
    ///
    /// Text ids compare verbatim. Numeric ids match any reference that
    /// parses to the same integer, so `"42"` matches `42`.
    pub fn matches(&self, reference: &VehicleId) -> bool {
        match self {
            RecordId::Text(text) => text == reference.as_str(),
            RecordId::Numeric(n) => reference
                .as_str()
                .trim()
                .parse::<i64>()
                .map_or(false, |parsed| parsed == *n),
        }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}
