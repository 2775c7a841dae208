//! Reducer trait.

use super::intent::Intent;
use super::state::ScreenState;

/// Reducer transforms state based on intents.
///
/// The previous state is only borrowed, so it stays observable after the
/// call. Implementations must be pure: same `(state, intent)` in, same
/// state out.
pub trait Reducer {
    type State: ScreenState;
    type Intent: Intent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Self::State;
}
