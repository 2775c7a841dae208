//! Submission of the product form.
//!
//! [`plan`] turns a form snapshot into a create or update request without
//! side effects; [`submit`] then issues that request against a
//! [`ProductRepository`] under a timeout. No retry, no rollback: the form
//! state is untouched whatever the outcome.

mod error;
mod plan;

use std::time::Duration;

use serde::Serialize;

use crate::catalog::{ProductId, ProductRepository};
use crate::form::FormState;

pub(crate) use error::timeout_reason;
pub use error::SubmitError;
pub use plan::{plan, SubmitRequest};

/// Successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "product_id", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created(ProductId),
    Updated(ProductId),
}

impl SubmitOutcome {
    pub fn product_id(&self) -> ProductId {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => *id,
        }
    }
}

/// Validate `state` and dispatch the matching repository call.
pub async fn submit<R: ProductRepository>(
    state: &FormState,
    identity: Option<ProductId>,
    repository: &R,
    timeout: Duration,
) -> Result<SubmitOutcome, SubmitError> {
    let request = match plan(state, identity) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "Submit rejected by validation");
            return Err(err);
        }
    };
    dispatch(request, repository, timeout).await
}

/// Issue an already planned request.
pub async fn dispatch<R: ProductRepository>(
    request: SubmitRequest,
    repository: &R,
    timeout: Duration,
) -> Result<SubmitOutcome, SubmitError> {
    let result = match request {
        SubmitRequest::Create(product) => {
            match tokio::time::timeout(timeout, repository.create(product)).await {
                Ok(Ok(id)) => Ok(SubmitOutcome::Created(id)),
                Ok(Err(err)) => Err(SubmitError::from(err)),
                Err(_) => Err(SubmitError::timed_out(timeout)),
            }
        }
        SubmitRequest::Update { id, update } => {
            match tokio::time::timeout(timeout, repository.update(id, update)).await {
                Ok(Ok(())) => Ok(SubmitOutcome::Updated(id)),
                Ok(Err(err)) => Err(SubmitError::from(err)),
                Err(_) => Err(SubmitError::timed_out(timeout)),
            }
        }
    };

    match &result {
        Ok(outcome) => tracing::info!(product_id = %outcome.product_id(), ?outcome, "Product submitted"),
        Err(err) => tracing::warn!(error_type = err.error_type(), error = %err, "Product submit failed"),
    }
    result
}
