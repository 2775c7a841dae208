use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as stored by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub price: f64,
}

/// Payload for creating a product. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

/// Payload for updating an existing product.
///
/// Price is fixed at creation time and therefore absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub title: String,
    pub description: String,
    pub image_url: String,
}
