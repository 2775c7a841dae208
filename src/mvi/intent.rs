//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// Intents are explicit tagged events (never dynamically shaped objects)
/// handed to a reducer.
pub trait Intent: Send + 'static {}
