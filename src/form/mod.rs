//! Product form state.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Field values, per-field validity and the aggregate flag
//! - `intent.rs` - Field edit events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `validate.rs` - Per-field predicates run before an edit is dispatched

mod field;
mod intent;
mod reducer;
mod state;
mod validate;

pub use field::Field;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FieldValidity, FieldValues, FormMode, FormState};
pub use validate::{parse_price, validate, FieldRule, ValidationRules};
