use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use super::field_id::FieldId;

/// A single-predicate visibility dependency: show this field when the
/// referenced field holds the expected value.
///
/// Carried as a data contract only; no show/hide logic consumes it yet.
/// This is deliberately not a boolean expression language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    /// Id of the field this one depends on.
    pub depends_on: FieldId,
    /// The value the referenced field must hold.
    pub value: AnswerValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_wire_form() {
        let vis = Visibility {
            depends_on: FieldId::parse("has_pet").unwrap(),
            value: AnswerValue::Boolean(true),
        };
        let json = serde_json::to_string(&vis).unwrap();
        assert_eq!(json, r#"{"dependsOn":"has_pet","value":true}"#);
    }

    #[test]
    fn serde_roundtrip_string_value() {
        let vis = Visibility {
            depends_on: FieldId::parse("country").unwrap(),
            value: AnswerValue::Text("Other".into()),
        };
        let json = serde_json::to_string(&vis).unwrap();
        let back: Visibility = serde_json::from_str(&json).unwrap();
        assert_eq!(vis, back);
    }
}
