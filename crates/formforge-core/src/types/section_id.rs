use std::fmt;

use mti::prelude::{MagicTypeIdExt, V7};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormError;

const PREFIX: &str = "section";

/// Identifier for a [`super::Section`], unique within a form.
///
/// Accepts any non-empty string on parse: model-generated schemas use
/// free-form ids like `"section_1"`. Freshly generated ids are TypeIDs
/// with the `section` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Generates a new unique `SectionId` using UUIDv7.
    pub fn generate() -> Self {
        Self(PREFIX.create_type_id::<V7>().to_string())
    }

    /// Parses a `SectionId`, rejecting only the empty string.
    pub fn parse(s: &str) -> Result<Self, FormError> {
        if s.is_empty() {
            return Err(FormError::EmptySectionId);
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the string representation of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
