//! Sequential fill-out sessions.
//!
//! A [`FillSession`] walks a respondent through a form one field at a
//! time: answers are recorded per field, forward movement is gated by
//! that field's validation, and the completed answer map is handed to
//! a [`SubmissionSink`] exactly once.

pub mod error;
pub mod session;
pub mod sink;

pub use error::{SessionError, SubmissionError, SubmitError};
pub use session::{FillSession, SessionPhase, StepOutcome};
pub use sink::{Submission, SubmissionSink};
