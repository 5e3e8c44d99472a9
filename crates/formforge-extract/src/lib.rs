//! Extraction of a [`formforge_core::types::Form`] from raw language-model
//! output.
//!
//! Model completions are chatty: reasoning-capable models wrap
//! chain-of-thought in `<think>…</think>` blocks and surround the answer
//! with prose. [`extract_form`] strips the reasoning, locates the JSON
//! object with a string-aware balanced-brace scan, parses it, and
//! validates the structural invariants before handing the form to anyone.

pub mod error;
pub mod prompt;

mod scan;

pub use error::ExtractError;

use formforge_core::types::Form;
use tracing::debug;

/// Extracts a validated `Form` from raw model output.
///
/// Fails with an [`ExtractError`] if no JSON object can be located, the
/// candidate does not parse, or the parsed form violates the schema
/// invariants. No partial form is ever produced.
pub fn extract_form(raw: &str) -> Result<Form, ExtractError> {
    let without_reasoning = scan::strip_reasoning(raw);
    let candidate = scan::json_candidate(&without_reasoning)?;
    debug!(len = candidate.len(), "located JSON candidate in model output");

    let form: Form = serde_json::from_str(candidate).map_err(|e| ExtractError::Parse {
        message: e.to_string(),
    })?;
    form.validate().map_err(ExtractError::InvalidForm)?;
    Ok(form)
}
