//! Frame-driven animation state.
//!
//! Nothing in here knows about time sources: callers step the state with
//! the elapsed duration of each frame tick.

mod extent;
mod spring;

pub use extent::AnimatedExtent;
pub use spring::{Spring, SpringSpec};
