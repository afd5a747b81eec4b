use crate::config::{Config, Revision, SavedSession, SessionStore};
use crate::ui::greeting::{GreetingIntent, GreetingListState, GreetingReducer};
use crate::ui::layout::body_rect;
use crate::ui::list::{item_areas, toggle_area};
use crate::ui::mvi::Reducer;
use crate::ui::onboarding::onboarding_areas;
use crate::ui::shell::{ShellIntent, ShellReducer, ShellState};
use crate::ui::view::{self, Action, Screen, ToggleStyle};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// Longest step an animation takes per tick, so a stalled loop does not
/// jump a spring to its end.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Generic MVI dispatch: moves the state through the reducer.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Like `dispatch_mvi!`, but flags a redraw when the state changed.
/// Evaluates to whether it changed.
macro_rules! dispatch_mvi_tracked {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let previous = $self.$field.clone();
        dispatch_mvi!($self, $field, $reducer, $intent);
        let changed = $self.$field != previous;
        $self.needs_redraw |= changed;
        changed
    }};
}

/// What a mouse click landed on.
enum Hit {
    Control(Action),
    Item(usize),
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    revision: Revision,
    toggle_style: ToggleStyle,
    /// Onboarding vs. list (MVI pattern).
    shell: ShellState,
    /// Greeting list and per-item state (MVI pattern).
    greetings: GreetingListState,
    /// Where the onboarding flag is persisted, for revisions that keep it.
    session: Option<SessionStore>,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: &Config, session: Option<SessionStore>) -> Self {
        let shell = session
            .as_ref()
            .map(|store| ShellState::restored(store.load_or_default().show_onboarding))
            .unwrap_or_default();
        let greetings = GreetingListState::new(config.subjects(), config.list_settings());
        tracing::info!(
            revision = config.revision.label(),
            subjects = greetings.len(),
            onboarding = shell.is_onboarding(),
            "App state initialized"
        );

        Self {
            should_quit: false,
            size: None,
            revision: config.revision,
            toggle_style: config.revision.toggle_style(),
            shell,
            greetings,
            session,
            needs_redraw: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn shell(&self) -> ShellState {
        self.shell
    }

    pub fn greetings(&self) -> &GreetingListState {
        &self.greetings
    }

    /// View description of the current state.
    pub fn screen(&self) -> Screen<'_> {
        view::screen(self.shell, &self.greetings, self.toggle_style)
    }

    /// True once since the last call if anything visible changed.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if !self.greetings.is_animating() {
            return;
        }
        // A running animation moves on every non-empty step.
        let dt = elapsed.min(MAX_FRAME_STEP);
        dispatch_mvi!(self, greetings, GreetingReducer, GreetingIntent::Tick { dt });
        self.needs_redraw |= !dt.is_zero();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.dispatch_greetings(GreetingIntent::Resize { rows: body.height });
        self.needs_redraw = true;
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.shell.is_onboarding() {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                if let Some(Hit::Control(action)) = self.hit_test(mouse.column, mouse.row) {
                    self.activate(action);
                }
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.dispatch_greetings(GreetingIntent::SelectNext),
            MouseEventKind::ScrollUp => self.dispatch_greetings(GreetingIntent::SelectPrevious),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_test(mouse.column, mouse.row) {
                    Some(Hit::Control(action)) => self.activate(action),
                    Some(Hit::Item(index)) => {
                        self.dispatch_greetings(GreetingIntent::JumpTo { index })
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Run the action of an activated control.
    pub fn activate(&mut self, action: Action) {
        match action {
            Action::CompleteOnboarding => self.complete_onboarding(),
            Action::ToggleItem { index } => {
                self.dispatch_greetings(GreetingIntent::JumpTo { index });
                self.dispatch_greetings(GreetingIntent::Toggle { index });
            }
        }
    }

    /// Dispatch an intent to the shell reducer.
    pub fn dispatch_shell(&mut self, intent: ShellIntent) -> bool {
        dispatch_mvi_tracked!(self, shell, ShellReducer, intent)
    }

    /// Dispatch an intent to the greeting list reducer.
    pub fn dispatch_greetings(&mut self, intent: GreetingIntent) {
        dispatch_mvi_tracked!(self, greetings, GreetingReducer, intent);
    }

    /// Write the onboarding flag, for revisions that keep it.
    pub fn persist_session(&self) {
        let Some(store) = &self.session else {
            return;
        };
        let session = SavedSession {
            show_onboarding: self.shell.show_onboarding(),
        };
        if let Err(err) = store.save(&session) {
            tracing::warn!(error = %err, "Failed to save session");
        }
    }

    fn complete_onboarding(&mut self) {
        if self.dispatch_shell(ShellIntent::CompleteOnboarding) {
            tracing::info!("Onboarding completed");
            self.persist_session();
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let (cols, rows) = self.size?;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        let position = Position::new(column, row);

        match self.screen() {
            Screen::Onboarding(view) => {
                let (_, button) = onboarding_areas(&view, body);
                button
                    .contains(position)
                    .then_some(Hit::Control(view.control.action))
            }
            Screen::List(view) => {
                let (item, rect) = item_areas(&view, body)
                    .into_iter()
                    .find(|(_, rect)| rect.contains(position))?;
                if toggle_area(item, rect).contains(position) {
                    Some(Hit::Control(item.toggle.action))
                } else {
                    Some(Hit::Item(item.index))
                }
            }
        }
    }
}
