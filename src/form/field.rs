use std::fmt;

use serde::{Deserialize, Serialize};

/// One editable attribute of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    ImageUrl,
    Description,
    Price,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Title, Field::ImageUrl, Field::Price, Field::Description];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::ImageUrl => "Image URL",
            Field::Description => "Description",
            Field::Price => "Price",
        }
    }

    /// Hint shown below the input while it is invalid.
    pub fn error_hint(self) -> &'static str {
        match self {
            Field::Title => "Please enter a valid title.",
            Field::ImageUrl => "Please enter a valid image URL.",
            Field::Description => "Please enter a valid description.",
            Field::Price => "Please enter a valid price.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
