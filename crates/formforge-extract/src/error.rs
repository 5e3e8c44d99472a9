use std::fmt;

use formforge_core::FormError;

/// Errors produced while extracting a form schema from model output.
///
/// The JSON parser error is stringified to keep `Clone + Eq`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// No `{` was found outside the stripped reasoning blocks.
    NoJsonObject,
    /// A `{` was found but the object never closes; `depth` is how many
    /// braces were still open at end of input.
    UnbalancedJson { depth: usize },
    /// The candidate substring is not valid JSON for the form shape.
    Parse { message: String },
    /// The parsed form violates a structural invariant.
    InvalidForm(FormError),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoJsonObject => write!(f, "no JSON object found in model output"),
            Self::UnbalancedJson { depth } => {
                write!(f, "JSON object never closes ({depth} unclosed braces)")
            }
            Self::Parse { message } => write!(f, "failed to parse model output as JSON: {message}"),
            Self::InvalidForm(e) => write!(f, "extracted form is invalid: {e}"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidForm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormError> for ExtractError {
    fn from(e: FormError) -> Self {
        Self::InvalidForm(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ExtractError::NoJsonObject.to_string(),
            "no JSON object found in model output"
        );
        assert_eq!(
            ExtractError::UnbalancedJson { depth: 2 }.to_string(),
            "JSON object never closes (2 unclosed braces)"
        );
        assert!(ExtractError::Parse {
            message: "expected value".into()
        }
        .to_string()
        .contains("expected value"));
        assert!(ExtractError::InvalidForm(FormError::EmptyFieldId)
            .to_string()
            .contains("field id"));
    }

    #[test]
    fn invalid_form_has_source() {
        use std::error::Error;
        let err = ExtractError::InvalidForm(FormError::EmptyFieldId);
        assert!(err.source().is_some());
        assert!(ExtractError::NoJsonObject.source().is_none());
    }

    #[test]
    fn from_form_error() {
        let err: ExtractError = FormError::EmptySectionId.into();
        assert_eq!(err, ExtractError::InvalidForm(FormError::EmptySectionId));
    }
}
