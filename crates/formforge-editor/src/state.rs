use formforge_core::types::{Field, FieldId, FieldKind, Form, Section, SectionId};
use tracing::warn;

use crate::action::{EditorAction, Outcome};

const DEFAULT_SECTION_TITLE: &str = "New Section";
const DEFAULT_SECTION_DESCRIPTION: &str = "Section description";

/// What the editor currently has focused. A selected field always
/// belongs to the selected section; every mutation re-checks the
/// selection and drops ids that no longer resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub section: Option<SectionId>,
    pub field: Option<FieldId>,
}

/// Editor state: the form under construction plus the selection.
///
/// All edits go through [`EditorState::apply`], which never mutates in
/// place; callers get the next state and keep the old one for undo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub form: Form,
    pub selection: Selection,
}

impl EditorState {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            selection: Selection::default(),
        }
    }

    /// Applies one action, returning the next state and whether it
    /// differs from this one. Unknown ids and out-of-range indices are
    /// rejected with a warning and `Outcome::Unchanged`.
    pub fn apply(&self, action: &EditorAction) -> (EditorState, Outcome) {
        let mut next = self.clone();
        let changed = next.apply_mut(action);
        let outcome = if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        };
        (next, outcome)
    }

    fn apply_mut(&mut self, action: &EditorAction) -> bool {
        match action {
            EditorAction::SetTitle(title) => {
                if self.form.title == *title {
                    return false;
                }
                self.form.title = title.clone();
                true
            }
            EditorAction::SetDescription(description) => {
                if self.form.description == *description {
                    return false;
                }
                self.form.description = description.clone();
                true
            }
            EditorAction::AddSection => {
                let section = default_section();
                self.selection.section = Some(section.id.clone());
                self.selection.field = None;
                self.form.sections.push(section);
                true
            }
            EditorAction::DeleteSection(id) => {
                let Some(index) = self.section_index(id) else {
                    warn!(section = %id, "delete rejected, unknown section");
                    return false;
                };
                self.form.sections.remove(index);
                if self.selection.section.as_ref() == Some(id) {
                    self.selection = Selection::default();
                }
                true
            }
            EditorAction::UpdateSection { section, patch } => {
                let Some(index) = self.section_index(section) else {
                    warn!(section = %section, "update rejected, unknown section");
                    return false;
                };
                patch.apply_to(&mut self.form.sections[index])
            }
            EditorAction::MoveSection { from, to } => {
                let len = self.form.sections.len();
                if *from >= len || *to >= len {
                    warn!(from, to, len, "move rejected, section index out of range");
                    return false;
                }
                if from == to {
                    return false;
                }
                let section = self.form.sections.remove(*from);
                self.form.sections.insert(*to, section);
                true
            }
            EditorAction::AddField { section, kind } => {
                let index = match section {
                    Some(id) => match self.section_index(id) {
                        Some(index) => index,
                        None => {
                            warn!(section = %id, "add field rejected, unknown section");
                            return false;
                        }
                    },
                    None => {
                        if self.form.sections.is_empty() {
                            self.form.sections.push(default_section());
                        }
                        self.form.sections.len() - 1
                    }
                };
                let field = default_field(kind);
                self.selection.section = Some(self.form.sections[index].id.clone());
                self.selection.field = Some(field.id.clone());
                self.form.sections[index].fields.push(field);
                true
            }
            EditorAction::DeleteField { section, field } => {
                let Some((section_index, field_index)) = self.field_index(section, field) else {
                    return false;
                };
                self.form.sections[section_index].fields.remove(field_index);
                if self.selection.field.as_ref() == Some(field) {
                    self.selection.field = None;
                }
                true
            }
            EditorAction::UpdateField {
                section,
                field,
                patch,
            } => {
                let Some((section_index, field_index)) = self.field_index(section, field) else {
                    return false;
                };
                patch.apply_to(&mut self.form.sections[section_index].fields[field_index])
            }
            EditorAction::MoveField { section, from, to } => {
                let Some(section_index) = self.section_index(section) else {
                    warn!(section = %section, "move rejected, unknown section");
                    return false;
                };
                let fields = &mut self.form.sections[section_index].fields;
                let len = fields.len();
                if *from >= len || *to >= len {
                    warn!(from, to, len, "move rejected, field index out of range");
                    return false;
                }
                if from == to {
                    return false;
                }
                let field = fields.remove(*from);
                fields.insert(*to, field);
                true
            }
            EditorAction::SelectSection(id) => {
                if let Some(id) = id {
                    if self.section_index(id).is_none() {
                        warn!(section = %id, "select rejected, unknown section");
                        return false;
                    }
                }
                let next = Selection {
                    section: id.clone(),
                    field: None,
                };
                if self.selection == next {
                    return false;
                }
                self.selection = next;
                true
            }
            EditorAction::SelectField(id) => {
                let Some((section, _)) = self.form.field(id) else {
                    warn!(field = %id, "select rejected, unknown field");
                    return false;
                };
                let next = Selection {
                    section: Some(section.id.clone()),
                    field: Some(id.clone()),
                };
                if self.selection == next {
                    return false;
                }
                self.selection = next;
                true
            }
        }
    }

    fn section_index(&self, id: &SectionId) -> Option<usize> {
        self.form.sections.iter().position(|s| s.id == *id)
    }

    fn field_index(&self, section: &SectionId, field: &FieldId) -> Option<(usize, usize)> {
        let section_index = match self.section_index(section) {
            Some(index) => index,
            None => {
                warn!(section = %section, "unknown section");
                return None;
            }
        };
        match self.form.sections[section_index]
            .fields
            .iter()
            .position(|f| f.id == *field)
        {
            Some(field_index) => Some((section_index, field_index)),
            None => {
                warn!(section = %section, field = %field, "unknown field in section");
                None
            }
        }
    }
}

fn default_section() -> Section {
    Section::new(
        SectionId::generate(),
        DEFAULT_SECTION_TITLE,
        DEFAULT_SECTION_DESCRIPTION,
    )
}

fn default_field(kind: &FieldKind) -> Field {
    let mut field = Field::new(
        FieldId::generate(),
        kind.clone(),
        format!("New {} field", kind.as_str()),
    );
    field.placeholder = Some(format!("Enter {}...", kind.as_str()));
    if kind.has_options() {
        field.options = Some(vec![
            "Option 1".to_string(),
            "Option 2".to_string(),
            "Option 3".to_string(),
        ]);
    }
    field
}
