//! SubmitFormHandler - accepts a completed form payload.
//!
//! Submissions are acknowledged and written to the log; nothing is stored.

use crate::domain::foundation::SubmissionId;

/// Command carrying an arbitrary submitted payload.
#[derive(Debug, Clone)]
pub struct SubmitFormCommand {
    pub payload: serde_json::Value,
}

/// Result of a submission.
#[derive(Debug, Clone)]
pub struct SubmitFormResult {
    pub submission_id: SubmissionId,
}

/// Handler for form submissions.
#[derive(Debug, Default)]
pub struct SubmitFormHandler;

impl SubmitFormHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SubmitFormCommand) -> SubmitFormResult {
        let submission_id = SubmissionId::new();

        tracing::info!(
            submission_id = %submission_id,
            payload = %cmd.payload,
            "Form submitted"
        );

        SubmitFormResult { submission_id }
    }
}
