use crate::ui::app::App;
use crate::ui::greeting::GreetingIntent;
use crate::ui::view::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if app.shell().is_onboarding() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c')
        ) {
            app.activate(Action::CompleteOnboarding);
        }
        return;
    }

    let intent = match key.code {
        KeyCode::Up | KeyCode::Char('k') => GreetingIntent::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => GreetingIntent::SelectNext,
        KeyCode::PageUp => GreetingIntent::PageUp,
        KeyCode::PageDown => GreetingIntent::PageDown,
        KeyCode::Home | KeyCode::Char('g') => GreetingIntent::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => GreetingIntent::SelectLast,
        KeyCode::Enter | KeyCode::Char(' ') => GreetingIntent::ToggleSelected,
        _ => return,
    };
    app.dispatch_greetings(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Revision};
    use crate::ui::shell::ShellState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list_app() -> App {
        let config = Config {
            revision: Revision::Stateful,
            ..Config::default()
        };
        let mut app = App::new(&config, None);
        app.on_resize(80, 24);
        handle_key(&mut app, press(KeyCode::Enter));
        app
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(&Config::default(), None);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_c_completes_onboarding_instead_of_quitting() {
        let mut app = App::new(&Config::default(), None);
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert!(!app.should_quit());
        assert_eq!(app.shell(), ShellState::List);
    }

    #[test]
    fn list_keys_move_selection_and_toggle() {
        let mut app = list_app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.greetings().selected(), 2);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.greetings().item(2).is_some_and(|item| item.is_expanded()));

        handle_key(&mut app, press(KeyCode::End));
        assert_eq!(app.greetings().selected(), 999);
        handle_key(&mut app, press(KeyCode::Home));
        assert_eq!(app.greetings().selected(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = list_app();
        let mut key = press(KeyCode::Down);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.greetings().selected(), 0);
    }
}
