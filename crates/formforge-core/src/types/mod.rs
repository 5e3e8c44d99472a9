//! Entity shapes for the form schema: ids, kinds, constraints, and the
//! `Form`/`Section`/`Field` tree itself.

mod answer;
mod field;
mod field_id;
mod field_kind;
mod form;
mod section;
mod section_id;
mod validation_rules;
mod visibility;

pub use answer::{AnswerMap, AnswerValue};
pub use field::Field;
pub use field_id::FieldId;
pub use field_kind::FieldKind;
pub use form::Form;
pub use section::Section;
pub use section_id::SectionId;
pub use validation_rules::ValidationRules;
pub use visibility::Visibility;
