//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_repository;

use std::path::PathBuf;

use product_editor::catalog::{Product, ProductId};
use product_editor::form::{Field, FormIntent, FormReducer, FormState, ValidationRules};
use product_editor::mvi::Reducer;
use tempfile::TempDir;

pub use mock_repository::{RecordingHost, RecordingRepository, RepoCall};

/// The product used by the edit scenarios.
pub fn existing_product() -> Product {
    Product {
        id: ProductId(42),
        title: "Old".to_string(),
        image_url: "u".to_string(),
        description: "d".to_string(),
        price: 12.5,
    }
}

/// Apply one edit under the default rules.
pub fn edit(state: &FormState, field: Field, text: &str) -> FormState {
    FormReducer::reduce(state, FormIntent::edit(field, text, &ValidationRules::default()))
}

/// A create form with every field filled in.
pub fn filled_create_form(price: &str) -> FormState {
    let mut state = FormState::for_create();
    for (field, text) in [
        (Field::Title, "Lamp"),
        (Field::ImageUrl, "http://x/y.png"),
        (Field::Description, "Desk lamp"),
        (Field::Price, price),
    ] {
        state = edit(&state, field, text);
    }
    state
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
