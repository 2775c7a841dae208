//! Product entity and the repository boundary.

mod memory;
mod product;
mod repository;

pub use memory::MemoryCatalog;
pub use product::{NewProduct, Product, ProductId, ProductUpdate};
pub use repository::{ProductRepository, RepositoryError};
