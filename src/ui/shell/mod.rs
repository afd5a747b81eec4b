//! App shell feature module.
//!
//! Decides which screen is shown: onboarding until the user continues once,
//! then the greeting list for the rest of the session.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen enum (Onboarding → List)
//! - `intent.rs` - The single completion callback (CompleteOnboarding)
//! - `reducer.rs` - One-way transition (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ShellIntent;
pub use reducer::ShellReducer;
pub use state::ShellState;
