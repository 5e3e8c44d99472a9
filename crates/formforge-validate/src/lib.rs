//! Validation derivation: compiles a field list into a runtime
//! validator.
//!
//! Each [`formforge_core::types::Field`] yields one [`rule::FieldRule`];
//! the rules compose into a [`FormValidator`] that can gate a single
//! field (conversational traversal) or check the whole answer map
//! (final submission). The failure messages are a user-visible
//! contract and must not drift.

pub mod cache;
pub mod failure;
pub mod rule;
pub mod validator;

pub use cache::ValidatorCache;
pub use failure::ValidationFailure;
pub use rule::FieldRule;
pub use validator::FormValidator;
