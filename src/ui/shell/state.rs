//! State for the app shell.

use crate::ui::mvi::UiState;

/// Which top-level screen is mounted.
///
/// `Onboarding` ⇔ the onboarding flag is still set. `List` is terminal for
/// the session: no intent leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Onboarding,
    List,
}

impl UiState for ShellState {}

impl ShellState {
    /// Rebuild the shell from a persisted onboarding flag.
    pub fn restored(show_onboarding: bool) -> Self {
        if show_onboarding {
            Self::Onboarding
        } else {
            Self::List
        }
    }

    pub fn is_onboarding(&self) -> bool {
        matches!(self, Self::Onboarding)
    }

    /// The onboarding flag as persisted in the session file.
    pub fn show_onboarding(&self) -> bool {
        self.is_onboarding()
    }
}
