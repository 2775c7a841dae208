//! Per-field validators.
//!
//! Every field defaults to [`FieldRule::NonEmpty`]: the text is valid iff
//! it is non-empty after trimming. No URL or numeric shape checks happen
//! unless a stricter rule is configured.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Predicate applied to the raw text of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Trimmed text has at least one character.
    #[default]
    NonEmpty,
    /// Trimmed text parses as a finite decimal number.
    Decimal,
}

impl FieldRule {
    pub fn check(self, raw: &str) -> bool {
        match self {
            FieldRule::NonEmpty => !raw.trim().is_empty(),
            FieldRule::Decimal => parse_price(raw).is_some(),
        }
    }
}

/// Table of rules, one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub title: FieldRule,
    pub image_url: FieldRule,
    pub description: FieldRule,
    pub price: FieldRule,
}

impl ValidationRules {
    pub fn rule(&self, field: Field) -> FieldRule {
        match field {
            Field::Title => self.title,
            Field::ImageUrl => self.image_url,
            Field::Description => self.description,
            Field::Price => self.price,
        }
    }

    pub fn validate(&self, field: Field, raw: &str) -> bool {
        self.rule(field).check(raw)
    }
}

/// Validate `raw` for `field` under the default rules.
pub fn validate(field: Field, raw: &str) -> bool {
    ValidationRules::default().validate(field, raw)
}

/// Convert price text to a number.
///
/// Returns `None` for text that does not parse or parses to NaN/infinity.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|price| price.is_finite())
}
