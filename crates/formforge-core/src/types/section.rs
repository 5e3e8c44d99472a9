use serde::{Deserialize, Serialize};

use super::field::Field;
use super::section_id::SectionId;

/// A titled, ordered group of fields within a form.
///
/// A section with zero fields is valid; the builder UI renders a
/// call-to-action for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(id: SectionId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Looks up a field by id within this section.
    pub fn field(&self, id: &super::FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldId, FieldKind};

    #[test]
    fn empty_section_is_valid() {
        let s = Section::new(SectionId::parse("s1").unwrap(), "Intro", "About you");
        assert!(s.fields.is_empty());
    }

    #[test]
    fn field_lookup() {
        let mut s = Section::new(SectionId::parse("s1").unwrap(), "Intro", "");
        s.fields.push(Field::new(
            FieldId::parse("name").unwrap(),
            FieldKind::Text,
            "Name",
        ));
        assert!(s.field(&FieldId::parse("name").unwrap()).is_some());
        assert!(s.field(&FieldId::parse("missing").unwrap()).is_none());
    }

    #[test]
    fn deserialize_tolerates_missing_description_and_fields() {
        let s: Section = serde_json::from_str(r#"{"id":"s1","title":"Intro"}"#).unwrap();
        assert_eq!(s.description, "");
        assert!(s.fields.is_empty());
    }

    #[test]
    fn empty_description_is_not_serialized() {
        let s = Section::new(SectionId::parse("s1").unwrap(), "Intro", "");
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("description").is_none());
        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn serde_roundtrip() {
        let mut s = Section::new(SectionId::parse("s1").unwrap(), "Intro", "About you");
        s.fields.push(Field::new(
            FieldId::parse("name").unwrap(),
            FieldKind::Text,
            "Name",
        ));
        let json = serde_json::to_string(&s).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
