//! Model-View-Intent (MVI) primitives for screen state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Host
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of a screen's form
//! - **Intent**: A field edit or other user event
//! - **Reducer**: Pure function from (previous state, intent) to next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ScreenState;
