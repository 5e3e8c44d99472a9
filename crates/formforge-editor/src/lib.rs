//! Structural editing engine for form schemas.
//!
//! The editor is a pure reducer: [`EditorState::apply`] takes an
//! [`EditorAction`] and returns the next state plus an [`Outcome`]
//! telling the caller whether anything changed. Invalid edits (unknown
//! ids, out-of-range indices) never panic and never corrupt the form;
//! they report [`Outcome::Unchanged`].

pub mod action;
pub mod patch;
pub mod state;

pub use action::{EditorAction, Outcome};
pub use patch::{FieldPatch, SectionPatch};
pub use state::{EditorState, Selection};
