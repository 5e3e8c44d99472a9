use formforge_core::types::{AnswerValue, Field, FieldId, FieldKind};
use regex::Regex;
use tracing::warn;

use crate::failure::ValidationFailure;

pub(crate) const INVALID_EMAIL: &str = "Invalid email address";
pub(crate) const INVALID_FORMAT: &str = "Invalid format";
pub(crate) const INVALID_VALUE: &str = "Invalid value";

/// The base value shape a rule checks before any constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseRule {
    /// Plain string input. Every kind that is not email or checkbox,
    /// including unknown kinds.
    Text,
    /// String input that must additionally satisfy the email grammar.
    Email,
    /// Boolean input (checkbox).
    Boolean,
}

/// The compiled validation rule for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field_id: FieldId,
    label: String,
    required: bool,
    base: BaseRule,
    min_length: Option<u32>,
    max_length: Option<u32>,
    pattern: Option<Regex>,
}

impl FieldRule {
    /// Compiles the rule for a field definition.
    ///
    /// An unparseable `pattern` is skipped with a warning; derivation is
    /// total over any well-formed field list.
    pub fn compile(field: &Field) -> Self {
        let base = match field.kind {
            FieldKind::Email => BaseRule::Email,
            FieldKind::Checkbox => BaseRule::Boolean,
            _ => BaseRule::Text,
        };

        let rules = field.rules();
        let pattern = rules.pattern.as_deref().and_then(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(field = %field.id, pattern = p, error = %e, "skipping unparseable pattern");
                None
            }
        });

        Self {
            field_id: field.id.clone(),
            label: field.label.clone(),
            required: field.required,
            base,
            min_length: rules.min_length,
            max_length: rules.max_length,
            pattern,
        }
    }

    /// Id of the field this rule validates.
    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    /// Checks a candidate answer (possibly absent) against this rule.
    ///
    /// Required emptiness is checked before anything else, so a required
    /// empty email reports `{label} is required` while a required
    /// non-empty invalid one reports `Invalid email address`. An absent
    /// answer on an optional field is valid; a present one is held to
    /// every constraint.
    pub fn check(&self, answer: Option<&AnswerValue>) -> Result<(), ValidationFailure> {
        let Some(value) = answer else {
            if self.required {
                return Err(self.fail(format!("{} is required", self.label)));
            }
            return Ok(());
        };

        match self.base {
            BaseRule::Boolean => match value {
                AnswerValue::Boolean(_) => Ok(()),
                _ => Err(self.fail(INVALID_VALUE)),
            },
            BaseRule::Text | BaseRule::Email => {
                let Some(text) = value.as_text() else {
                    return Err(self.fail(INVALID_VALUE));
                };
                if self.required && text.is_empty() {
                    return Err(self.fail(format!("{} is required", self.label)));
                }
                if self.base == BaseRule::Email && !is_valid_email(text) {
                    return Err(self.fail(INVALID_EMAIL));
                }
                if let Some(min) = self.min_length {
                    if (text.chars().count() as u32) < min {
                        return Err(self.fail(format!("Min {min} characters")));
                    }
                }
                if let Some(max) = self.max_length {
                    if (text.chars().count() as u32) > max {
                        return Err(self.fail(format!("Max {max} characters")));
                    }
                }
                if let Some(re) = &self.pattern {
                    if !re.is_match(text) {
                        return Err(self.fail(INVALID_FORMAT));
                    }
                }
                Ok(())
            }
        }
    }

    fn fail(&self, message: impl Into<String>) -> ValidationFailure {
        ValidationFailure::new(self.field_id.clone(), message)
    }
}

/// Pragmatic email grammar: one `@`, non-empty local part, domain with
/// an interior dot, no whitespace.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((head, tail)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && !tail.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::types::ValidationRules;

    fn field(id: &str, kind: FieldKind, required: bool) -> Field {
        let mut f = Field::new(FieldId::parse(id).unwrap(), kind, format!("The {id}"));
        f.required = required;
        f
    }

    fn text(s: &str) -> AnswerValue {
        AnswerValue::Text(s.into())
    }

    #[test]
    fn required_absent_fails_with_label_message() {
        let rule = FieldRule::compile(&field("name", FieldKind::Text, true));
        let err = rule.check(None).unwrap_err();
        assert_eq!(err.message, "The name is required");
    }

    #[test]
    fn required_empty_string_fails_with_label_message() {
        let rule = FieldRule::compile(&field("name", FieldKind::Text, true));
        let err = rule.check(Some(&text(""))).unwrap_err();
        assert_eq!(err.message, "The name is required");
    }

    #[test]
    fn required_nonempty_passes() {
        let rule = FieldRule::compile(&field("name", FieldKind::Text, true));
        assert!(rule.check(Some(&text("Ada"))).is_ok());
    }

    #[test]
    fn optional_absent_is_valid() {
        let rule = FieldRule::compile(&field("nickname", FieldKind::Text, false));
        assert!(rule.check(None).is_ok());
    }

    #[test]
    fn required_bad_email_reports_email_message_not_required() {
        // Base-type rule wins over the required message for non-empty input.
        let rule = FieldRule::compile(&field("email", FieldKind::Email, true));
        let err = rule.check(Some(&text("bad-email"))).unwrap_err();
        assert_eq!(err.message, "Invalid email address");
    }

    #[test]
    fn required_empty_email_reports_required_message() {
        let rule = FieldRule::compile(&field("email", FieldKind::Email, true));
        let err = rule.check(Some(&text(""))).unwrap_err();
        assert_eq!(err.message, "The email is required");
    }

    #[test]
    fn valid_email_passes() {
        let rule = FieldRule::compile(&field("email", FieldKind::Email, true));
        assert!(rule.check(Some(&text("ada@lovelace.dev"))).is_ok());
    }

    #[test]
    fn optional_present_email_is_still_checked() {
        let rule = FieldRule::compile(&field("email", FieldKind::Email, false));
        let err = rule.check(Some(&text("nope"))).unwrap_err();
        assert_eq!(err.message, "Invalid email address");
    }

    #[test]
    fn min_length_message() {
        let mut f = field("bio", FieldKind::Textarea, false);
        f.validations = Some(ValidationRules {
            min_length: Some(10),
            ..Default::default()
        });
        let rule = FieldRule::compile(&f);
        let err = rule.check(Some(&text("short"))).unwrap_err();
        assert_eq!(err.message, "Min 10 characters");
        assert!(rule.check(Some(&text("long enough here"))).is_ok());
    }

    #[test]
    fn max_length_message() {
        let mut f = field("bio", FieldKind::Textarea, false);
        f.validations = Some(ValidationRules {
            max_length: Some(5),
            ..Default::default()
        });
        let rule = FieldRule::compile(&f);
        let err = rule.check(Some(&text("too long for this"))).unwrap_err();
        assert_eq!(err.message, "Max 5 characters");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut f = field("name", FieldKind::Text, false);
        f.validations = Some(ValidationRules {
            max_length: Some(4),
            ..Default::default()
        });
        let rule = FieldRule::compile(&f);
        assert!(rule.check(Some(&text("héllo"))).is_err());
        assert!(rule.check(Some(&text("héll"))).is_ok());
    }

    #[test]
    fn pattern_message() {
        let mut f = field("zip", FieldKind::Text, false);
        f.validations = Some(ValidationRules {
            pattern: Some("^[0-9]{5}$".into()),
            ..Default::default()
        });
        let rule = FieldRule::compile(&f);
        let err = rule.check(Some(&text("abcde"))).unwrap_err();
        assert_eq!(err.message, "Invalid format");
        assert!(rule.check(Some(&text("12345"))).is_ok());
    }

    #[test]
    fn unparseable_pattern_is_skipped() {
        let mut f = field("zip", FieldKind::Text, false);
        f.validations = Some(ValidationRules {
            pattern: Some("[unclosed".into()),
            ..Default::default()
        });
        let rule = FieldRule::compile(&f);
        assert!(rule.check(Some(&text("anything"))).is_ok());
    }

    #[test]
    fn checkbox_accepts_booleans() {
        let rule = FieldRule::compile(&field("agree", FieldKind::Checkbox, true));
        assert!(rule.check(Some(&AnswerValue::Boolean(true))).is_ok());
        assert!(rule.check(Some(&AnswerValue::Boolean(false))).is_ok());
    }

    #[test]
    fn required_checkbox_absent_fails() {
        let rule = FieldRule::compile(&field("agree", FieldKind::Checkbox, true));
        let err = rule.check(None).unwrap_err();
        assert_eq!(err.message, "The agree is required");
    }

    #[test]
    fn checkbox_rejects_text() {
        let rule = FieldRule::compile(&field("agree", FieldKind::Checkbox, false));
        let err = rule.check(Some(&text("yes"))).unwrap_err();
        assert_eq!(err.message, "Invalid value");
    }

    #[test]
    fn text_rule_rejects_non_text() {
        let rule = FieldRule::compile(&field("name", FieldKind::Text, false));
        let err = rule.check(Some(&AnswerValue::Number(3.0))).unwrap_err();
        assert_eq!(err.message, "Invalid value");
    }

    #[test]
    fn unknown_kind_uses_text_base_rule() {
        let rule = FieldRule::compile(&field("phone", FieldKind::parse("phone"), true));
        assert!(rule.check(Some(&text("555-0100"))).is_ok());
        let err = rule.check(Some(&text(""))).unwrap_err();
        assert_eq!(err.message, "The phone is required");
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.co"));
    }
}
