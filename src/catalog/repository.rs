//! Repository trait for product persistence.
//!
//! The form core only ever issues `lookup` (once, when a session opens),
//! `create` and `update`. Storage, id generation and failure modes belong
//! to the implementation.

use std::future::Future;

use thiserror::Error;

use super::product::{NewProduct, Product, ProductId, ProductUpdate};

/// Errors surfaced by a product repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The product to update does not exist.
    #[error("Product '{id}' not found")]
    NotFound { id: ProductId },

    /// The repository refused the request.
    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    /// The repository could not be reached.
    #[error("Repository unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Storage interface for products.
///
/// Uses native async fn in traits; implementations must be shareable across
/// tasks.
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by id. `Ok(None)` when it does not exist.
    fn lookup(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, RepositoryError>> + Send;

    /// Persist a new product and return its assigned id.
    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductId, RepositoryError>> + Send;

    /// Overwrite title, description and image URL of an existing product.
    fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}
