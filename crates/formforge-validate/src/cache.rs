use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use formforge_core::types::Field;
use tracing::debug;

use crate::validator::FormValidator;

/// Memoizes a compiled [`FormValidator`] keyed by a structural hash of
/// the field list, so edits that leave the structure alone (answers,
/// selection) never trigger a recompile.
#[derive(Debug, Clone)]
pub struct ValidatorCache {
    hash: u64,
    validator: FormValidator,
}

impl ValidatorCache {
    pub fn new(fields: &[Field]) -> Self {
        Self {
            hash: structural_hash(fields),
            validator: FormValidator::compile(fields),
        }
    }

    /// Recompiles only when the field structure changed. Returns true
    /// if a recompile happened.
    pub fn refresh(&mut self, fields: &[Field]) -> bool {
        let hash = structural_hash(fields);
        if hash == self.hash {
            return false;
        }
        debug!(fields = fields.len(), "field structure changed; recompiling validator");
        self.hash = hash;
        self.validator = FormValidator::compile(fields);
        true
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }
}

/// Hashes the serialized field list. Serialization of these types
/// cannot fail in practice; an empty string hash is the harmless
/// fallback.
fn structural_hash(fields: &[Field]) -> u64 {
    let json = serde_json::to_string(fields).unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    json.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::types::{FieldId, FieldKind};

    fn field(id: &str, label: &str) -> Field {
        Field::new(FieldId::parse(id).unwrap(), FieldKind::Text, label)
    }

    #[test]
    fn refresh_is_a_noop_for_identical_structure() {
        let fields = vec![field("a", "A"), field("b", "B")];
        let mut cache = ValidatorCache::new(&fields);
        assert!(!cache.refresh(&fields));
        assert_eq!(cache.validator().len(), 2);
    }

    #[test]
    fn refresh_recompiles_when_a_field_is_added() {
        let mut fields = vec![field("a", "A")];
        let mut cache = ValidatorCache::new(&fields);
        fields.push(field("b", "B"));
        assert!(cache.refresh(&fields));
        assert_eq!(cache.validator().len(), 2);
    }

    #[test]
    fn refresh_recompiles_when_a_rule_input_changes() {
        let mut fields = vec![field("a", "A")];
        let mut cache = ValidatorCache::new(&fields);
        fields[0].required = true;
        assert!(cache.refresh(&fields));
    }

    #[test]
    fn refresh_recompiles_on_reorder() {
        let mut fields = vec![field("a", "A"), field("b", "B")];
        let mut cache = ValidatorCache::new(&fields);
        fields.swap(0, 1);
        assert!(cache.refresh(&fields));
    }
}
