//! Error types for form submission.

use std::time::Duration;

use thiserror::Error;

use crate::catalog::RepositoryError;
use crate::form::Field;

/// Errors that can occur when submitting the product form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// One or more fields are invalid, or the price is not a number.
    /// The repository was not called.
    #[error("Invalid fields: {}", join_fields(invalid_fields))]
    ValidationFailed { invalid_fields: Vec<Field> },

    /// The repository did not answer in time or reported itself unreachable.
    #[error("Repository unavailable: {reason}")]
    RepositoryUnavailable { reason: String },

    /// The repository answered with an error.
    #[error("Repository rejected the request: {0}")]
    RepositoryRejected(RepositoryError),
}

impl From<RepositoryError> for SubmitError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable { reason } => SubmitError::RepositoryUnavailable { reason },
            other => SubmitError::RepositoryRejected(other),
        }
    }
}

impl SubmitError {
    pub(crate) fn timed_out(timeout: Duration) -> Self {
        SubmitError::RepositoryUnavailable {
            reason: timeout_reason(timeout),
        }
    }

    /// True when the user should be shown the wrong-input alert.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::ValidationFailed { .. })
    }

    /// Get error type string for logs and JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            SubmitError::ValidationFailed { .. } => "validation_failed",
            SubmitError::RepositoryUnavailable { .. } => "repository_unavailable",
            SubmitError::RepositoryRejected(_) => "repository_rejected",
        }
    }
}

/// Reason recorded when a repository call outlives `timeout`.
pub(crate) fn timeout_reason(timeout: Duration) -> String {
    format!("no response within {}ms", timeout.as_millis())
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
