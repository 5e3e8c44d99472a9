use formforge_core::types::{AnswerMap, AnswerValue, Field, Form};
use formforge_validate::{FormValidator, ValidationFailure};
use tracing::{debug, warn};

use crate::error::{SessionError, SubmitError};
use crate::sink::{Submission, SubmissionSink};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Asking the field at this flattened index.
    Active(usize),
    /// All fields passed; awaiting the submit call.
    Submitting,
    /// Terminal. The answers are gone to the sink.
    Submitted,
}

/// Result of one forward step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The current field failed validation; the session did not move.
    Stayed(ValidationFailure),
    /// Moved to the field at this index.
    Moved(usize),
    /// The last field passed; the session entered `Submitting`.
    ReadyToSubmit,
    /// The session already submitted; there is nothing left to step
    /// through.
    AlreadySubmitted,
}

/// A single respondent's walk through a form.
///
/// Fields are visited in document order (section order, then field
/// order within each section). Moving forward validates only the
/// field being left; going back never validates. All transitions take
/// `&mut self`, so no two can be in flight.
#[derive(Debug, Clone)]
pub struct FillSession {
    fields: Vec<Field>,
    validator: FormValidator,
    answers: AnswerMap,
    phase: SessionPhase,
}

impl FillSession {
    /// Starts a session at the first field. A form with no fields has
    /// nothing to ask and is rejected.
    pub fn new(form: &Form) -> Result<Self, SessionError> {
        let fields: Vec<Field> = form.flattened_fields().into_iter().cloned().collect();
        if fields.is_empty() {
            return Err(SessionError::NoFields);
        }
        let validator = FormValidator::compile(&fields);
        debug!(fields = fields.len(), "fill session started");
        Ok(Self {
            fields,
            validator,
            answers: AnswerMap::new(),
            phase: SessionPhase::Active(0),
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Total flattened field count.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The field currently being asked, if any.
    pub fn current_field(&self) -> Option<&Field> {
        match self.phase {
            SessionPhase::Active(i) => self.fields.get(i),
            _ => None,
        }
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Records (or overwrites) the answer for the current field.
    /// Returns false outside the active phase.
    pub fn record(&mut self, value: AnswerValue) -> bool {
        let SessionPhase::Active(i) = self.phase else {
            warn!("answer ignored, session is not asking a field");
            return false;
        };
        self.answers.insert(self.fields[i].id.clone(), value);
        true
    }

    /// Attempts to leave the current field. The field being left is
    /// validated; earlier fields are not re-checked.
    pub fn advance(&mut self) -> StepOutcome {
        let i = match self.phase {
            SessionPhase::Active(i) => i,
            SessionPhase::Submitting => return StepOutcome::ReadyToSubmit,
            SessionPhase::Submitted => {
                warn!("advance ignored, session already submitted");
                return StepOutcome::AlreadySubmitted;
            }
        };
        if let Err(failure) = self
            .validator
            .validate_field(&self.fields[i].id, &self.answers)
        {
            return StepOutcome::Stayed(failure);
        }
        if i + 1 < self.fields.len() {
            self.phase = SessionPhase::Active(i + 1);
            StepOutcome::Moved(i + 1)
        } else {
            self.phase = SessionPhase::Submitting;
            StepOutcome::ReadyToSubmit
        }
    }

    /// Steps back one field, never validating. Returns false at the
    /// first field or outside the active phase.
    pub fn back(&mut self) -> bool {
        match self.phase {
            SessionPhase::Active(i) if i > 0 => {
                self.phase = SessionPhase::Active(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Seals the session: re-validates the whole answer map, then
    /// hands it to the sink exactly once. Any failure drops the
    /// session back to the last field with all answers preserved, so
    /// the respondent can retry.
    pub async fn submit<S: SubmissionSink>(&mut self, sink: &S) -> Result<(), SubmitError> {
        if self.phase != SessionPhase::Submitting {
            return Err(SubmitError::NotReady);
        }
        let last = self.fields.len() - 1;
        if let Err(failures) = self.validator.validate_all(&self.answers) {
            warn!(failures = failures.len(), "submission blocked by validation");
            self.phase = SessionPhase::Active(last);
            return Err(SubmitError::Validation(failures));
        }
        let submission = Submission::new(self.answers.clone());
        if let Err(err) = sink.submit(&submission).await {
            warn!(%err, "submission sink failed");
            self.phase = SessionPhase::Active(last);
            return Err(err.into());
        }
        self.phase = SessionPhase::Submitted;
        debug!(answers = submission.answers.len(), "submission accepted");
        Ok(())
    }
}
