//! Greeting list feature module.
//!
//! Owns the subject sequence, the selection, the scroll window and the
//! per-item expansion state of every mounted greeting.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - List state, per-item state and window bookkeeping
//! - `intent.rs` - Toggles, navigation, resizes and frame ticks
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::GreetingIntent;
pub use reducer::GreetingReducer;
pub use state::{
    DetailReveal, GreetingListState, GreetingSubject, ItemState, ListSettings, ListStrategy,
    ITEM_BASE_ROWS,
};
