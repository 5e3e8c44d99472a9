use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The input type of a field.
///
/// The wire form is the lowercase type string. Unknown strings are
/// preserved in `Other` rather than rejected: validation derivation
/// falls back to the plain text rule for them, and serialization
/// round-trips the original string untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
    Date,
    /// Any type string not in the known set.
    Other(String),
}

impl FieldKind {
    /// Parses a type string. Never fails; unknown strings become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "email" => Self::Email,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "file" => Self::File,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire (lowercase) type string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Date => "date",
            Self::Other(s) => s,
        }
    }

    /// Returns true for the choice kinds that require an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
