//! Intents for the app shell.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the shell reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellIntent {
    /// The onboarding control was activated.
    CompleteOnboarding,
}

impl Intent for ShellIntent {}
