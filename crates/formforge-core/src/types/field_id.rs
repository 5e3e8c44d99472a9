use std::fmt;

use mti::prelude::{MagicTypeIdExt, V7};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormError;

const PREFIX: &str = "field";

/// Identifier for a [`super::Field`], unique across the whole form.
///
/// Like [`super::SectionId`], any non-empty string parses; models emit
/// ids like epoch-millis strings. Generated ids are `field`-prefixed
/// TypeIDs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Generates a new unique `FieldId` using UUIDv7.
    pub fn generate() -> Self {
        Self(PREFIX.create_type_id::<V7>().to_string())
    }

    /// Parses a `FieldId`, rejecting only the empty string.
    pub fn parse(s: &str) -> Result<Self, FormError> {
        if s.is_empty() {
            return Err(FormError::EmptyFieldId);
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the string representation of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
