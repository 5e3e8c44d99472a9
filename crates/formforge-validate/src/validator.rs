use std::collections::HashMap;

use formforge_core::types::{AnswerMap, Field, FieldId};
use tracing::warn;

use crate::failure::ValidationFailure;
use crate::rule::FieldRule;

/// The composed whole-form validator: one rule per field, in document
/// order.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: Vec<FieldRule>,
    by_id: HashMap<FieldId, usize>,
}

impl FormValidator {
    /// Compiles a validator from a field list. Pure: same fields, same
    /// validator.
    pub fn compile<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let rules: Vec<FieldRule> = fields.into_iter().map(FieldRule::compile).collect();
        let by_id = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.field_id().clone(), i))
            .collect();
        Self { rules, by_id }
    }

    /// Number of field rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were compiled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validates a single field in isolation, used to gate traversal.
    ///
    /// An id with no rule validates trivially (mirrors triggering an
    /// unregistered field), with a warning since it usually means the
    /// validator is stale.
    pub fn validate_field(
        &self,
        field: &FieldId,
        answers: &AnswerMap,
    ) -> Result<(), ValidationFailure> {
        match self.by_id.get(field) {
            Some(&i) => self.rules[i].check(answers.get(field)),
            None => {
                warn!(%field, "no rule for field id; validator may be stale");
                Ok(())
            }
        }
    }

    /// Validates the whole answer map, collecting every failure in
    /// field order. Used at final submission.
    pub fn validate_all(&self, answers: &AnswerMap) -> Result<(), Vec<ValidationFailure>> {
        let failures: Vec<ValidationFailure> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(answers.get(rule.field_id())).err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}
