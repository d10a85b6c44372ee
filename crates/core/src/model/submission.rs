use chrono::{DateTime, Utc};

use crate::model::answers::AnswerMap;

/// Snapshot of an answer map taken when a form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    form_type: String,
    answers: AnswerMap,
    submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    #[must_use]
    pub fn new(
        form_type: impl Into<String>,
        answers: AnswerMap,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            form_type: form_type.into(),
            answers,
            submitted_at,
        }
    }

    /// The form type that was selected when this record was submitted.
    #[must_use]
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[must_use]
    pub fn into_parts(self) -> (String, AnswerMap) {
        (self.form_type, self.answers)
    }
}
