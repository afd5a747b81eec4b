//! Reducer for the app shell.

use crate::ui::mvi::Reducer;

use super::intent::ShellIntent;
use super::state::ShellState;

/// Reducer for the onboarding → list transition.
///
/// Pure function. Persisting the new flag is the caller's job.
pub struct ShellReducer;

impl Reducer for ShellReducer {
    type State = ShellState;
    type Intent = ShellIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShellIntent::CompleteOnboarding => match state {
                ShellState::Onboarding => ShellState::List,
                ShellState::List => ShellState::List,
            },
        }
    }
}
