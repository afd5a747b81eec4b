//! Intents for the greeting list.

use crate::ui::mvi::Intent;
use std::time::Duration;

/// Intents that can be dispatched to the greeting list reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingIntent {
    /// Toggle control of the item at `index` was activated.
    /// Ignored when that item is not mounted.
    Toggle { index: usize },

    /// Toggle the selected item.
    ToggleSelected,

    SelectNext,
    SelectPrevious,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,

    /// Select the item at `index` (clamped) and scroll it into view.
    JumpTo { index: usize },

    /// Viewport height changed.
    Resize { rows: u16 },

    /// A frame elapsed; advance running animations.
    Tick { dt: Duration },
}

impl Intent for GreetingIntent {}
