mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, SubmitConfig, DEFAULT_SUBMIT_TIMEOUT_MS};
