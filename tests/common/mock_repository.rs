//! Recording repository and host for session tests.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use product_editor::catalog::{
    NewProduct, Product, ProductId, ProductRepository, ProductUpdate, RepositoryError,
};
use product_editor::session::{Alert, ScreenHost};

/// A call observed by [`RecordingRepository`].
#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    Lookup(ProductId),
    Create(NewProduct),
    Update(ProductId, ProductUpdate),
}

#[derive(Default)]
struct RepoInner {
    products: Vec<Product>,
    calls: Vec<RepoCall>,
    write_delay: Option<Duration>,
    write_error: Option<RepositoryError>,
    lookup_delay: Option<Duration>,
    lookup_error: Option<RepositoryError>,
    next_id: u64,
}

/// Repository that records every call and can be told to stall or fail writes.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// session.
#[derive(Clone, Default)]
pub struct RecordingRepository {
    inner: Arc<Mutex<RepoInner>>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        let repo = Self::default();
        repo.inner.lock().next_id = 100;
        repo
    }

    pub fn with_product(product: Product) -> Self {
        let repo = Self::new();
        repo.inner.lock().products.push(product);
        repo
    }

    /// Delay every create/update by `delay`.
    pub fn stall_writes(&self, delay: Duration) {
        self.inner.lock().write_delay = Some(delay);
    }

    /// Fail every create/update with `err`.
    pub fn fail_writes(&self, err: RepositoryError) {
        self.inner.lock().write_error = Some(err);
    }

    /// Delay every lookup by `delay`.
    pub fn stall_lookups(&self, delay: Duration) {
        self.inner.lock().lookup_delay = Some(delay);
    }

    /// Fail every lookup with `err`.
    pub fn fail_lookups(&self, err: RepositoryError) {
        self.inner.lock().lookup_error = Some(err);
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.inner.lock().calls.clone()
    }

    /// Calls other than lookups.
    pub fn writes(&self) -> Vec<RepoCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, RepoCall::Lookup(_)))
            .collect()
    }

    fn record_write(&self, call: RepoCall) -> (Option<Duration>, Option<RepositoryError>) {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        (inner.write_delay, inner.write_error.clone())
    }
}

impl ProductRepository for RecordingRepository {
    async fn lookup(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let (delay, error) = {
            let mut inner = self.inner.lock();
            inner.calls.push(RepoCall::Lookup(id));
            (inner.lookup_delay, inner.lookup_error.clone())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = error {
            return Err(err);
        }
        let inner = self.inner.lock();
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<ProductId, RepositoryError> {
        let (delay, error) = self.record_write(RepoCall::Create(product));
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = error {
            return Err(err);
        }
        let mut inner = self.inner.lock();
        let id = ProductId(inner.next_id);
        inner.next_id += 1;
        Ok(id)
    }

    async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<(), RepositoryError> {
        let (delay, error) = self.record_write(RepoCall::Update(id, update));
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct HostInner {
    alerts: Vec<Alert>,
    back_count: usize,
}

/// Host that records alerts and navigation requests.
#[derive(Clone, Default)]
pub struct RecordingHost {
    inner: Arc<Mutex<HostInner>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.inner.lock().alerts.clone()
    }

    pub fn back_count(&self) -> usize {
        self.inner.lock().back_count
    }
}

impl ScreenHost for RecordingHost {
    fn go_back(&self) {
        self.inner.lock().back_count += 1;
    }

    fn show_alert(&self, alert: &Alert) {
        self.inner.lock().alerts.push(*alert);
    }
}
