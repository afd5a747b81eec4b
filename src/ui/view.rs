//! Pure view descriptions.
//!
//! Everything here is a function of state. Widgets are produced from these
//! descriptions by `onboarding`, `list` and `render`; nothing in this module
//! touches a frame.

use crate::ui::greeting::GreetingListState;
use crate::ui::shell::ShellState;

pub const WELCOME_TEXT: &str = "Welcome to the Basics Codelab!";
pub const CONTINUE_LABEL: &str = "Continue";
pub const GREETING_LABEL: &str = "Hello, ";
pub const SHOW_MORE: &str = "Show more";
pub const SHOW_LESS: &str = "Show less";

/// Body of the detail block shown under an expanded greeting.
pub const DETAIL_BODY: &str = concat!(
    "Lorem ipsum dolor sit amet. Ea laudantium saepe sed esse voluptas",
    "eos sapiente quia. Sed necessitatibus commodi et adipisci ullam",
    "non placeat expedita est laudantium reiciendis."
);

/// What activating a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CompleteOnboarding,
    ToggleItem { index: usize },
}

/// An actionable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Accessible label; also the visible text for buttons.
    pub label: &'static str,
    pub action: Action,
}

/// How a greeting's toggle control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStyle {
    /// `[ Show more ]` / `[ Show less ]`
    Button,
    /// `▼` / `▲`
    Icon,
}

/// Text of a control drawn as a button.
pub fn button_text(control: &Control) -> String {
    format!("[ {} ]", control.label)
}

impl ToggleStyle {
    pub fn text(&self, control: &Control, expanded: bool) -> String {
        match self {
            Self::Button => button_text(control),
            Self::Icon => if expanded { "▲" } else { "▼" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingView {
    pub message: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    /// Index of the subject in the full list.
    pub index: usize,
    pub label: &'static str,
    pub subject: &'a str,
    pub expanded: bool,
    pub selected: bool,
    /// Rows revealed below the subject.
    pub extra_rows: u16,
    pub height: u16,
    pub toggle: Control,
    pub toggle_style: ToggleStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    /// Materialized items in subject order.
    pub items: Vec<ItemView<'a>>,
    /// Subject index rendered at the top of the viewport.
    pub first_visible: usize,
    /// Size of the whole subject list.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Onboarding(OnboardingView),
    List(ListView<'a>),
}

/// Exactly one of the two screens, gated by the shell state.
pub fn screen<'a>(
    shell: ShellState,
    list: &'a GreetingListState,
    toggle_style: ToggleStyle,
) -> Screen<'a> {
    match shell {
        ShellState::Onboarding => Screen::Onboarding(onboarding_view()),
        ShellState::List => Screen::List(list_view(list, toggle_style)),
    }
}

pub fn onboarding_view() -> OnboardingView {
    OnboardingView {
        message: WELCOME_TEXT,
        control: Control {
            label: CONTINUE_LABEL,
            action: Action::CompleteOnboarding,
        },
    }
}

/// One item per mounted subject, in subject order.
pub fn list_view(list: &GreetingListState, toggle_style: ToggleStyle) -> ListView<'_> {
    let settings = list.settings();
    let subjects = list.subjects();
    let items = list
        .mounted()
        .filter_map(|(index, item)| {
            let subject = subjects.get(index)?;
            let expanded = item.is_expanded();
            Some(ItemView {
                index,
                label: GREETING_LABEL,
                subject: subject.as_str(),
                expanded,
                selected: index == list.selected(),
                extra_rows: item.extra_rows(settings),
                height: item.height(settings),
                toggle: Control {
                    label: if expanded { SHOW_LESS } else { SHOW_MORE },
                    action: Action::ToggleItem { index },
                },
                toggle_style,
            })
        })
        .collect();

    ListView {
        items,
        first_visible: list.first_visible(),
        total: list.len(),
    }
}
