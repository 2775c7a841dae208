//! Intents for the product form.

use crate::mvi::Intent;

use super::field::Field;
use super::validate::ValidationRules;

/// Events dispatched to [`FormReducer`](super::FormReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// The user changed the text of `field`; `is_valid` is the validator's
    /// verdict on `text`.
    Update {
        field: Field,
        text: String,
        is_valid: bool,
    },
}

impl Intent for FormIntent {}

impl FormIntent {
    /// Build an update intent, running `rules` on the text.
    pub fn edit(field: Field, text: impl Into<String>, rules: &ValidationRules) -> Self {
        let text = text.into();
        let is_valid = rules.validate(field, &text);
        FormIntent::Update {
            field,
            text,
            is_valid,
        }
    }
}
