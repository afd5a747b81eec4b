//! Reducer for the greeting list.

use crate::ui::mvi::Reducer;

use super::intent::GreetingIntent;
use super::state::GreetingListState;

/// Reducer for greeting list transitions.
///
/// Every intent ends by scrolling the selection into view and re-mounting
/// the window, so item state never outlives its mounted item.
pub struct GreetingReducer;

impl Reducer for GreetingReducer {
    type State = GreetingListState;
    type Intent = GreetingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            GreetingIntent::Toggle { index } => toggle(&mut state, index),
            GreetingIntent::ToggleSelected => {
                let index = state.selected();
                toggle(&mut state, index);
            }
            GreetingIntent::SelectNext => {
                let next = state.selected().saturating_add(1);
                state.select(next);
            }
            GreetingIntent::SelectPrevious => {
                let previous = state.selected().saturating_sub(1);
                state.select(previous);
            }
            GreetingIntent::PageDown => {
                let next = state.selected().saturating_add(state.page_size());
                state.select(next);
            }
            GreetingIntent::PageUp => {
                let previous = state.selected().saturating_sub(state.page_size());
                state.select(previous);
            }
            GreetingIntent::SelectFirst => state.select(0),
            GreetingIntent::SelectLast => state.select(usize::MAX),
            GreetingIntent::JumpTo { index } => state.select(index),
            GreetingIntent::Resize { rows } => state.set_viewport_rows(rows),
            GreetingIntent::Tick { dt } => state.tick(dt),
        }
        state.settle();
        state
    }
}

fn toggle(state: &mut GreetingListState, index: usize) {
    if let Some(expanded) = state.toggle(index) {
        tracing::debug!(index, expanded, "Greeting toggled");
    }
}
