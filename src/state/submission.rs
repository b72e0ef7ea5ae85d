//! Submission Controller
//!
//! Draft job record for the add form, with local validation and the
//! submitting/error flags.

use crate::error::{ApiResult, ValidationError};
use crate::models::{DraftField, Job, JobDraft};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted the job; the caller navigates back to the listing
    Created(Job),
    /// Draft kept for another attempt
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    draft: JobDraft,
    submitting: bool,
    error: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set_field(field, value);
    }

    /// Title and company must be non-empty. Whitespace-only values pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.title.is_empty() || self.draft.company.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        Ok(())
    }

    /// Validate and mark as submitting. On success returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<JobDraft, ValidationError> {
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.submitting = true;
        self.error = None;
        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self, result: ApiResult<Job>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(job) => {
                log::info!("Created job {} ({})", job.id, job.title);
                SubmitOutcome::Created(job)
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
