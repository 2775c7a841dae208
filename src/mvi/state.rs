//! Marker trait for screen state.

/// Marker trait for screen state objects.
///
/// States are cloned to produce successors and compared with `PartialEq`
/// so a caller can tell whether an intent changed anything.
pub trait ScreenState: Clone + PartialEq + Send + 'static {}
