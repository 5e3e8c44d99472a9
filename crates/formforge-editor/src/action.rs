use formforge_core::types::{FieldId, FieldKind, SectionId};

use crate::patch::{FieldPatch, SectionPatch};

/// One editing step against an [`crate::EditorState`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EditorAction {
    SetTitle(String),
    SetDescription(String),
    AddSection,
    DeleteSection(SectionId),
    UpdateSection {
        section: SectionId,
        patch: SectionPatch,
    },
    MoveSection {
        from: usize,
        to: usize,
    },
    AddField {
        /// Target section; `None` appends to the last section,
        /// creating a default one on an empty form.
        section: Option<SectionId>,
        kind: FieldKind,
    },
    DeleteField {
        section: SectionId,
        field: FieldId,
    },
    UpdateField {
        section: SectionId,
        field: FieldId,
        patch: FieldPatch,
    },
    MoveField {
        section: SectionId,
        from: usize,
        to: usize,
    },
    SelectSection(Option<SectionId>),
    SelectField(FieldId),
}

/// Whether an action actually changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Unchanged,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}
