mod common;

use common::app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use greeter::config::Revision;
use greeter::ui::app::App;
use greeter::ui::input::handle_key;
use greeter::ui::shell::ShellState;
use greeter::ui::view::{Action, Screen};
use proptest::prelude::*;
use std::time::Duration;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A terminal event as the run loop would deliver it.
#[derive(Debug, Clone)]
enum UserEvent {
    Key(KeyCode),
    Scroll,
    Click { column: u16, row: u16 },
    Tick(Duration),
    Resize { cols: u16, rows: u16 },
}

fn deliver(app: &mut App, event: &UserEvent) {
    match *event {
        UserEvent::Key(code) => handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)),
        UserEvent::Scroll => app.on_mouse(mouse(MouseEventKind::ScrollDown, 10, 10)),
        UserEvent::Click { column, row } => app.on_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            column,
            row,
        )),
        UserEvent::Tick(elapsed) => app.on_tick(elapsed),
        UserEvent::Resize { cols, rows } => app.on_resize(cols, rows),
    }
}

/// Any event except the ones that activate the onboarding control.
///
/// Clicks stay in the left margin, which the centered button never reaches
/// at these widths.
fn non_activating_event() -> impl Strategy<Value = UserEvent> {
    prop_oneof![
        prop::sample::select(vec![
            KeyCode::Down,
            KeyCode::Char('k'),
            KeyCode::PageDown,
            KeyCode::End,
        ])
        .prop_map(UserEvent::Key),
        Just(UserEvent::Scroll),
        (0..10u16, 0..24u16).prop_map(|(column, row)| UserEvent::Click { column, row }),
        (0..40u64).prop_map(|ms| UserEvent::Tick(Duration::from_millis(ms))),
        (60..100u16, 20..40u16).prop_map(|(cols, rows)| UserEvent::Resize { cols, rows }),
    ]
}

fn any_event() -> impl Strategy<Value = UserEvent> {
    prop_oneof![
        1 => Just(UserEvent::Key(KeyCode::Enter)),
        1 => (0..80u16, 0..24u16).prop_map(|(column, row)| UserEvent::Click { column, row }),
        2 => non_activating_event(),
    ]
}

fn revision() -> impl Strategy<Value = Revision> {
    prop::sample::select(vec![Revision::Basic, Revision::Stateful, Revision::Animated])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn list_is_never_described_before_completion(
        revision in revision(),
        events in prop::collection::vec(non_activating_event(), 0..300),
    ) {
        let mut app = app(revision);
        for event in &events {
            deliver(&mut app, event);
            prop_assert!(matches!(app.screen(), Screen::Onboarding(_)), "after {event:?}");
        }
    }

    #[test]
    fn list_state_is_never_left(
        revision in revision(),
        events in prop::collection::vec(any_event(), 0..1000),
    ) {
        let mut app = app(revision);
        app.activate(Action::CompleteOnboarding);
        for event in &events {
            deliver(&mut app, event);
            prop_assert_eq!(app.shell(), ShellState::List);
            prop_assert!(matches!(app.screen(), Screen::List(_)), "after {event:?}");
        }
    }
}

#[test]
fn continue_control_works_once() {
    let mut app = app(Revision::Stateful);
    assert!(app.shell().is_onboarding());

    handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.shell(), ShellState::List);
    assert!(app.take_redraw());

    app.activate(Action::CompleteOnboarding);
    assert_eq!(app.shell(), ShellState::List);
    assert!(!app.take_redraw());
}

#[test]
fn quit_keys_request_exit() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = app(Revision::Basic);
        handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}

#[test]
fn animation_requests_frames_until_settled() {
    let mut app = app(Revision::Animated);
    app.activate(Action::CompleteOnboarding);
    handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    app.take_redraw();

    let mut frames = 0;
    while app.greetings().is_animating() {
        app.on_tick(Duration::from_millis(16));
        assert!(app.take_redraw());
        frames += 1;
        assert!(frames < 500, "spring never settled");
    }
    assert!(frames > 1);

    app.on_tick(Duration::from_millis(16));
    assert!(!app.take_redraw());
}

#[test]
fn wheel_moves_selection() {
    let mut app = app(Revision::Stateful);
    app.activate(Action::CompleteOnboarding);
    app.on_mouse(mouse(MouseEventKind::ScrollDown, 10, 10));
    app.on_mouse(mouse(MouseEventKind::ScrollDown, 10, 10));
    app.on_mouse(mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(app.greetings().selected(), 1);
}
