//! In-memory product catalog.
//!
//! Provides a thread-safe repository backed by a map, used by the CLI
//! driver and by tests. Ids are assigned sequentially after the highest
//! seeded id.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::product::{NewProduct, Product, ProductId, ProductUpdate};
use super::repository::{ProductRepository, RepositoryError};

/// Thread-safe in-memory catalog.
///
/// Many concurrent readers can look products up while creates and updates
/// take the write lock.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    inner: Arc<RwLock<CatalogInner>>,
}

struct CatalogInner {
    products: BTreeMap<ProductId, Product>,
    /// `None` once `u64::MAX` has been handed out or seeded.
    next_id: Option<u64>,
}

impl Default for CatalogInner {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: Some(0),
        }
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with `products`.
    ///
    /// Later entries with a duplicate id replace earlier ones.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut inner = CatalogInner::default();
        for product in products {
            inner.next_id = match (inner.next_id, product.id.0.checked_add(1)) {
                (Some(current), Some(after)) => Some(current.max(after)),
                _ => None,
            };
            inner.products.insert(product.id, product);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Snapshot of all products ordered by id.
    pub fn list(&self) -> Vec<Product> {
        self.inner.read().products.values().cloned().collect()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().products.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().products.is_empty()
    }
}

impl ProductRepository for MemoryCatalog {
    async fn lookup(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn create(&self, product: NewProduct) -> Result<ProductId, RepositoryError> {
        let mut inner = self.inner.write();
        let id = inner
            .next_id
            .map(ProductId)
            .ok_or_else(|| RepositoryError::Rejected {
                reason: "product ids exhausted".to_string(),
            })?;
        inner.next_id = id.0.checked_add(1);
        inner.products.insert(
            id,
            Product {
                id,
                title: product.title,
                image_url: product.image_url,
                description: product.description,
                price: product.price,
            },
        );

        tracing::debug!(product_id = %id, "Product created");
        Ok(id)
    }

    async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write();
        let product = inner
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        product.title = update.title;
        product.description = update.description;
        product.image_url = update.image_url;

        tracing::debug!(product_id = %id, "Product updated");
        Ok(())
    }
}
