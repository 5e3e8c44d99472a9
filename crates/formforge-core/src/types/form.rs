use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FormError;

use super::field::Field;
use super::field_id::FieldId;
use super::section::Section;
use super::section_id::SectionId;

/// The root schema entity: an entire form.
///
/// Section order is significant and, transitively, defines field
/// display order. A form always round-trips as one JSON value; it is
/// never partially persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Form {
    /// The editor's default starting point: no title, no sections.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            sections: Vec::new(),
        }
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Looks up a field anywhere in the form, returning its owning
    /// section as well.
    pub fn field(&self, id: &FieldId) -> Option<(&Section, &Field)> {
        self.sections
            .iter()
            .find_map(|s| s.field(id).map(|f| (s, f)))
    }

    /// All fields in document order: section order, then field order
    /// within each section.
    pub fn flattened_fields(&self) -> Vec<&Field> {
        self.sections.iter().flat_map(|s| s.fields.iter()).collect()
    }

    /// Total field count across all sections.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Checks the structural invariants:
    /// - section ids unique within the form
    /// - field ids unique across the whole form
    /// - `options` present and non-empty iff the kind is a choice kind
    ///
    /// A `visibility.dependsOn` referencing a missing field id is logged
    /// but not rejected; it is a preserved data contract with no
    /// consuming logic.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut section_ids = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(FormError::DuplicateSectionId(section.id.to_string()));
            }
        }

        let mut field_ids = HashSet::with_capacity(self.field_count());
        for field in self.flattened_fields() {
            if !field_ids.insert(field.id.as_str()) {
                return Err(FormError::DuplicateFieldId(field.id.to_string()));
            }

            let has_options = field.options.as_ref().is_some_and(|o| !o.is_empty());
            if field.kind.has_options() && !has_options {
                return Err(FormError::MissingOptions {
                    field: field.id.to_string(),
                    kind: field.kind.to_string(),
                });
            }
            if !field.kind.has_options() && field.options.is_some() {
                return Err(FormError::UnexpectedOptions {
                    field: field.id.to_string(),
                    kind: field.kind.to_string(),
                });
            }
        }

        for field in self.flattened_fields() {
            if let Some(vis) = &field.visibility {
                if !field_ids.contains(vis.depends_on.as_str()) {
                    warn!(
                        field = %field.id,
                        depends_on = %vis.depends_on,
                        "visibility references a field id that does not exist"
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::empty()
    }
}
