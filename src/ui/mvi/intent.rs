//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Control activations (continue, toggle an item)
/// - Navigation (selection moves, jumps)
/// - Host events (frame ticks, viewport resizes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
