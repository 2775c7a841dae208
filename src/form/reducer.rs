//! Reducer for the product form.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

/// Merges field edits into [`FormState`].
///
/// Pure function: validation happens before dispatch (see
/// [`FormIntent::edit`]) and the submit side effect lives in
/// [`crate::submit`].
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Update {
                field,
                text,
                is_valid,
            } => {
                if !state.mode().has_field(field) {
                    // Hidden field (price while editing): nothing to merge.
                    return state.clone();
                }
                state.with_field(field, text, is_valid)
            }
        }
    }
}
