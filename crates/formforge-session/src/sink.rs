use std::future::Future;

use chrono::{DateTime, Utc};
use formforge_core::types::AnswerMap;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

/// A completed fill-out: every answer plus the moment it was sealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub answers: AnswerMap,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(answers: AnswerMap) -> Self {
        Self {
            answers,
            submitted_at: Utc::now(),
        }
    }
}

/// Receiver for completed submissions. Implementations decide where a
/// submission goes (a database, an HTTP endpoint, a test buffer).
pub trait SubmissionSink: Send + Sync {
    fn submit(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}
