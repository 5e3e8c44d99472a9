use std::fmt;

/// Errors that occur when constructing or validating form schema types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    /// Section id was an empty string.
    EmptySectionId,
    /// Field id was an empty string.
    EmptyFieldId,
    /// Two sections share the same id.
    DuplicateSectionId(String),
    /// Two fields share the same id anywhere in the form.
    DuplicateFieldId(String),
    /// A select/radio/checkbox field has no options (or an empty list).
    MissingOptions { field: String, kind: String },
    /// A field of a non-choice kind carries an options list.
    UnexpectedOptions { field: String, kind: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySectionId => write!(f, "section id must not be empty"),
            Self::EmptyFieldId => write!(f, "field id must not be empty"),
            Self::DuplicateSectionId(id) => write!(f, "duplicate section id '{id}'"),
            Self::DuplicateFieldId(id) => write!(f, "duplicate field id '{id}'"),
            Self::MissingOptions { field, kind } => {
                write!(f, "field '{field}' of type '{kind}' requires non-empty options")
            }
            Self::UnexpectedOptions { field, kind } => {
                write!(f, "field '{field}' of type '{kind}' must not carry options")
            }
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let cases = vec![
            (FormError::EmptySectionId, "section id must not be empty"),
            (FormError::EmptyFieldId, "field id must not be empty"),
            (
                FormError::DuplicateSectionId("s1".into()),
                "duplicate section id 's1'",
            ),
            (
                FormError::DuplicateFieldId("f1".into()),
                "duplicate field id 'f1'",
            ),
            (
                FormError::MissingOptions {
                    field: "f1".into(),
                    kind: "select".into(),
                },
                "field 'f1' of type 'select' requires non-empty options",
            ),
            (
                FormError::UnexpectedOptions {
                    field: "f2".into(),
                    kind: "text".into(),
                },
                "field 'f2' of type 'text' must not carry options",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected, "for {error:?}");
        }
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(FormError::EmptyFieldId);
        assert!(err.to_string().contains("field id"));
    }
}
