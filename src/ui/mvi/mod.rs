//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every screen of the app is driven through these traits: the shell
//! (onboarding vs. list) and the greeting list with its per-item state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View description ──→ Widgets
//!    ↑                                                    │
//!    └────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Plain data, owned by exactly one component
//! - **Intent**: Control activations, ticks, resizes
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
