use std::error::Error;
use std::fmt;

use formforge_validate::ValidationFailure;

/// Failure to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// The form has no fields; there is nothing to walk through.
    NoFields,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFields => write!(f, "form has no fields to fill"),
        }
    }
}

impl Error for SessionError {}

/// Failure reported by a [`crate::SubmissionSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmissionError {
    /// The receiver refused the submission.
    Rejected { reason: String },
    /// The receiver could not be reached.
    Connection { message: String },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { reason } => write!(f, "submission rejected: {reason}"),
            Self::Connection { message } => write!(f, "submission connection failed: {message}"),
        }
    }
}

impl Error for SubmissionError {}

/// Failure of [`crate::FillSession::submit`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SubmitError {
    /// The session was not in the submitting phase.
    NotReady,
    /// Whole-map validation found failures, in field order.
    Validation(Vec<ValidationFailure>),
    /// The sink call failed.
    Sink(SubmissionError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "session is not ready to submit"),
            Self::Validation(failures) => {
                write!(f, "{} field(s) failed validation", failures.len())
            }
            Self::Sink(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SubmissionError> for SubmitError {
    fn from(err: SubmissionError) -> Self {
        Self::Sink(err)
    }
}
