//! Edit/create product session.
//!
//! One [`EditSession`] backs one open screen. It seeds the form from the
//! repository once, applies field edits through [`FormReducer`], and on
//! submit dispatches to the repository before asking the host to navigate
//! back.
//!
//! ```text
//! Editing ──submit (valid)────→ Submitted
//!    │  ↑
//!    └──┘ submit (invalid: alert) / repository error
//! ```
//!
//! Form state lives behind a mutex so each edit is a single
//! read-reduce-replace step, even when a session is shared across tasks.

mod host;

use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Product, ProductId, ProductRepository, RepositoryError};
use crate::config::Config;
use crate::form::{Field, FormIntent, FormMode, FormReducer, FormState, ValidationRules};
use crate::mvi::Reducer;
use crate::submit::{self, SubmitError, SubmitOutcome};

pub use host::{Alert, ScreenHost};

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The session already submitted successfully.
    #[error("Session already submitted")]
    Closed,

    /// Another submit is waiting on the repository.
    #[error("A submit is already in flight")]
    InFlight,

    /// The product to edit could not be loaded.
    #[error("Failed to load product '{id}': {source}")]
    Lookup {
        id: ProductId,
        #[source]
        source: RepositoryError,
    },

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Editing,
    Submitted(SubmitOutcome),
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub rules: ValidationRules,
    /// Upper bound on each repository call.
    pub timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rules: ValidationRules::default(),
            timeout: Duration::from_millis(crate::config::DEFAULT_SUBMIT_TIMEOUT_MS),
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rules: config.validation,
            timeout: config.submit.timeout(),
        }
    }
}

struct SessionInner {
    form: FormState,
    phase: SessionPhase,
    in_flight: bool,
}

/// State and collaborators of one open product screen.
pub struct EditSession<R, H> {
    id: Uuid,
    identity: Option<ProductId>,
    options: SessionOptions,
    repository: R,
    host: H,
    inner: Mutex<SessionInner>,
}

impl<R: ProductRepository, H: ScreenHost> EditSession<R, H> {
    /// Open a session for `product_id`, or for a new product when `None`.
    ///
    /// The product is looked up once. An id that resolves to no product
    /// opens a create form.
    pub async fn open(
        repository: R,
        host: H,
        product_id: Option<ProductId>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        let id = Uuid::new_v4();

        let existing = match product_id {
            Some(product_id) => lookup(&repository, product_id, options.timeout).await?,
            None => None,
        };
        if let (Some(product_id), None) = (product_id, &existing) {
            tracing::warn!(session_id = %id, %product_id, "Product not found, opening create form");
        }

        let identity = existing.as_ref().map(|product| product.id);
        let form = FormState::new(existing.as_ref());
        tracing::debug!(session_id = %id, mode = ?form.mode(), product_id = ?identity, "Session opened");

        Ok(Self {
            id,
            identity,
            options,
            repository,
            host,
            inner: Mutex::new(SessionInner {
                form,
                phase: SessionPhase::Editing,
                in_flight: false,
            }),
        })
    }

    /// Apply a text change to `field` and return the resulting form.
    pub fn edit(&self, field: Field, text: impl Into<String>) -> Result<FormState, SessionError> {
        let mut inner = self.inner.lock();
        if matches!(inner.phase, SessionPhase::Submitted(_)) {
            return Err(SessionError::Closed);
        }
        if inner.in_flight {
            return Err(SessionError::InFlight);
        }

        let intent = FormIntent::edit(field, text, &self.options.rules);
        inner.form = FormReducer::reduce(&inner.form, intent);
        tracing::trace!(
            session_id = %self.id,
            ?field,
            valid = ?inner.form.validity().get(field),
            form_valid = inner.form.is_form_valid(),
            "Field edited"
        );
        Ok(inner.form.clone())
    }

    /// Submit the form.
    ///
    /// Invalid input shows [`Alert::WRONG_INPUT`] and leaves the session
    /// editable. On success the session becomes `Submitted` and the host
    /// navigates back. Repository failures are returned with the form intact.
    pub async fn submit(&self) -> Result<SubmitOutcome, SessionError> {
        let planned = {
            let mut inner = self.inner.lock();
            if matches!(inner.phase, SessionPhase::Submitted(_)) {
                return Err(SessionError::Closed);
            }
            if inner.in_flight {
                return Err(SessionError::InFlight);
            }
            let planned = submit::plan(&inner.form, self.identity);
            if planned.is_ok() {
                inner.in_flight = true;
            }
            planned
        };

        let request = match planned {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(session_id = %self.id, error = %err, "Submit blocked by invalid input");
                self.host.show_alert(&Alert::WRONG_INPUT);
                return Err(err.into());
            }
        };

        let _guard = InFlightGuard { inner: &self.inner };
        let outcome = submit::dispatch(request, &self.repository, self.options.timeout).await?;

        self.inner.lock().phase = SessionPhase::Submitted(outcome);
        tracing::info!(session_id = %self.id, product_id = %outcome.product_id(), "Session submitted");
        self.host.go_back();
        Ok(outcome)
    }

    /// Snapshot of the current form.
    pub fn state(&self) -> FormState {
        self.inner.lock().form.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().phase
    }

    /// Hint to show under `field`, if it is present and invalid.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        match self.inner.lock().form.validity().get(field) {
            Some(false) => Some(field.error_hint()),
            _ => None,
        }
    }

    /// Title of the screen header.
    pub fn header_title(&self) -> &'static str {
        if self.identity.is_some() {
            "Edit Product"
        } else {
            "Create Product"
        }
    }

    /// Fields the host should render.
    pub fn fields(&self) -> &'static [Field] {
        self.mode().fields()
    }

    pub fn mode(&self) -> FormMode {
        if self.identity.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn identity(&self) -> Option<ProductId> {
        self.identity
    }

    pub fn session_id(&self) -> Uuid {
        self.id
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

/// Clears the in-flight flag however the dispatch ends, including when the
/// submit future is dropped.
struct InFlightGuard<'a> {
    inner: &'a Mutex<SessionInner>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.inner.lock().in_flight = false;
    }
}

async fn lookup<R: ProductRepository>(
    repository: &R,
    id: ProductId,
    timeout: Duration,
) -> Result<Option<Product>, SessionError> {
    match tokio::time::timeout(timeout, repository.lookup(id)).await {
        Ok(Ok(product)) => Ok(product),
        Ok(Err(source)) => Err(SessionError::Lookup { id, source }),
        Err(_) => Err(SessionError::Lookup {
            id,
            source: RepositoryError::Unavailable {
                reason: submit::timeout_reason(timeout),
            },
        }),
    }
}
