mod common;

use common::{edit, existing_product};
use product_editor::form::{validate, Field, FormIntent, FormMode, FormReducer, FormState};
use product_editor::mvi::Reducer;

const TEXTS: [&str; 6] = ["", "   ", "Lamp", " x ", "19.99", "\t"];

/// Deterministic edit sequences covering every field/text pairing.
fn sequences() -> Vec<Vec<(Field, &'static str)>> {
    let mut sequences = Vec::new();
    for seed in 0..24usize {
        let mut seq = Vec::new();
        for step in 0..10usize {
            let field = Field::ALL[(seed + step * 3) % Field::ALL.len()];
            let text = TEXTS[(seed * 7 + step * 5) % TEXTS.len()];
            seq.push((field, text));
        }
        sequences.push(seq);
    }
    sequences
}

fn assert_aggregate_matches_flags(state: &FormState) {
    let all = state.validity().iter().all(|(_, valid)| valid);
    assert_eq!(state.is_form_valid(), all);
}

#[test]
fn aggregate_validity_tracks_every_flag_after_each_edit() {
    for start in [FormState::for_create(), FormState::for_edit(&existing_product())] {
        for seq in sequences() {
            let mut state = start.clone();
            for (field, text) in seq {
                state = edit(&state, field, text);
                assert_aggregate_matches_flags(&state);
            }
        }
    }
}

#[test]
fn editing_one_field_leaves_the_others_alone() {
    for seq in sequences() {
        let mut state = FormState::for_create();
        for (field, text) in seq {
            let next = edit(&state, field, text);
            for other in Field::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(next.value(other), state.value(other));
                assert_eq!(next.validity().get(other), state.validity().get(other));
            }
            state = next;
        }
    }
}

#[test]
fn repeating_current_value_is_idempotent() {
    let state = common::filled_create_form("19.99");
    for field in Field::ALL {
        let intent = FormIntent::Update {
            field,
            text: state.value(field).to_string(),
            is_valid: state.validity().get(field).unwrap_or(true),
        };
        assert_eq!(FormReducer::reduce(&state, intent), state);
    }
}

#[test]
fn whitespace_title_is_invalid() {
    let state = edit(&FormState::for_create(), Field::Title, "   ");
    assert_eq!(state.validity().get(Field::Title), Some(false));
    assert_eq!(state.value(Field::Title), "   ");
    assert!(!validate(Field::Title, "   "));
}

#[test]
fn edit_mode_blanking_a_field_invalidates_form() {
    let state = FormState::for_edit(&existing_product());
    assert_eq!(state.mode(), FormMode::Edit);

    let blank = edit(&state, Field::ImageUrl, "");
    assert!(!blank.is_form_valid());
    assert_eq!(blank.validity().invalid_fields(), vec![Field::ImageUrl]);

    let restored = edit(&blank, Field::ImageUrl, "u2");
    assert!(restored.is_form_valid());
}

#[test]
fn reducer_trusts_the_verdict_in_the_intent() {
    let state = FormState::for_create();
    let next = FormReducer::reduce(
        &state,
        FormIntent::Update {
            field: Field::Price,
            text: "abc".to_string(),
            is_valid: false,
        },
    );
    assert_eq!(next.value(Field::Price), "abc");
    assert_eq!(next.validity().get(Field::Price), Some(false));
}
