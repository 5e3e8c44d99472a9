//! FormForge core: the dynamic form-schema model.
//!
//! A [`types::Form`] is the root entity produced by model-output
//! extraction or built up in the editor, and consumed by validation
//! derivation and the conversational fill session. Everything here is
//! a pure data contract: JSON-serializable, losslessly round-tripping,
//! with structural invariants checked by [`types::Form::validate`].

pub mod error;
pub mod types;

pub use error::FormError;
