use serde::{Deserialize, Serialize};

use super::field_id::FieldId;
use super::field_kind::FieldKind;
use super::validation_rules::ValidationRules;
use super::visibility::Visibility;

/// One input definition: type, label, and constraints.
///
/// `options` is present and non-empty iff the kind is a choice kind
/// (select/radio/checkbox); [`super::Form::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<ValidationRules>,
}

impl Field {
    /// Creates a minimal field: not required, no placeholder, options,
    /// visibility, or validations.
    pub fn new(id: FieldId, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            options: None,
            visibility: None,
            validations: None,
        }
    }

    /// Returns the validation rules, or an empty default.
    pub fn rules(&self) -> ValidationRules {
        self.validations.clone().unwrap_or_default()
    }
}
