//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Owned (moved through the reducer, never shared between components)
/// - Self-contained (all data needed to build the view description)
/// - Comparable (PartialEq decides whether a redraw is needed)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
