use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::form::ValidationRules;

/// Default upper bound on a repository call, in milliseconds.
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 5000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub submit: SubmitConfig,
    /// Rule per field (`non_empty` or `decimal`).
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Submission settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Repository call timeout in milliseconds (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Products loaded into the in-memory catalog at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<Product>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_SUBMIT_TIMEOUT_MS
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SubmitConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
