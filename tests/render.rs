mod common;

use common::{app, render, rows, screen_text};
use greeter::config::Revision;
use greeter::ui::greeting::{DetailReveal, GreetingIntent};
use greeter::ui::list::render_list;
use greeter::ui::view::{list_view, Action, ListView, ToggleStyle, DETAIL_BODY};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

const DETAIL_WORD: &str = "Lorem ipsum";

#[test]
fn onboarding_renders_message_and_button_only() {
    let app = app(Revision::Basic);
    let text = screen_text(&render(&app));
    assert!(text.contains("Welcome to the Basics Codelab!"));
    assert!(text.contains("[ Continue ]"));
    assert!(!text.contains("Hello,"));
}

#[test]
fn two_default_greetings_render_collapsed() {
    let mut app = app(Revision::Basic);
    app.activate(Action::CompleteOnboarding);
    let rows = rows(&render(&app));

    let label_rows: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.contains("Hello,"))
        .map(|(y, _)| y)
        .collect();
    assert_eq!(label_rows.len(), 2);
    assert!(rows[label_rows[0] + 1].contains("World"));
    assert!(rows[label_rows[1] + 1].contains("Compose"));
    assert!(label_rows[0] < label_rows[1]);

    let text = rows.join("\n");
    assert_eq!(text.matches("[ Show more ]").count(), 2);
    assert!(!text.contains(DETAIL_WORD));
}

#[test]
fn expanded_greeting_shows_detail_and_show_less() {
    let mut app = app(Revision::Basic);
    app.activate(Action::CompleteOnboarding);
    app.activate(Action::ToggleItem { index: 0 });
    let text = screen_text(&render(&app));
    assert!(text.contains(DETAIL_WORD));
    assert!(text.contains("[ Show less ]"));
    assert_eq!(text.matches("[ Show more ]").count(), 1);
}

#[test]
fn expanded_detail_shows_the_whole_body_text() {
    let mut app = app(Revision::Basic);
    app.activate(Action::CompleteOnboarding);
    app.activate(Action::ToggleItem { index: 0 });
    let rows = rows(&render(&app));

    let label = rows
        .iter()
        .position(|row| row.contains("Hello,"))
        .expect("label row");
    let detail: Vec<&str> = rows[label + 2..label + 5]
        .iter()
        .map(|row| row.trim_matches(|c: char| c == '│' || c.is_whitespace()))
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(detail.join(" "), DETAIL_BODY);
    assert!(DETAIL_BODY.starts_with("Lorem ipsum dolor sit amet."));
}

#[test]
fn animated_revision_uses_icons() {
    let mut app = app(Revision::Animated);
    app.activate(Action::CompleteOnboarding);
    let text = screen_text(&render(&app));
    assert!(text.contains('▼'));
    assert!(!text.contains("[ Show more ]"));
}

#[test]
fn empty_subject_list_renders_placeholder() {
    let mut config = common::config(Revision::Basic);
    config.list.subjects = Some(Vec::new());
    let mut app = greeter::ui::app::App::new(&config, None);
    app.on_resize(common::WIDTH, common::HEIGHT);
    app.activate(Action::CompleteOnboarding);
    let text = screen_text(&render(&app));
    assert!(text.contains("No greetings."));
}

/// Render a single item of `view` into a buffer of its own height.
fn render_item(view: &ListView<'_>, index: usize) -> Vec<String> {
    let item = view
        .items
        .iter()
        .find(|item| item.index == index)
        .expect("item described")
        .clone();
    let height = item.height;
    let single = ListView {
        items: vec![item],
        first_visible: index,
        total: view.total,
    };
    let mut terminal = Terminal::new(TestBackend::new(40, height)).expect("terminal");
    terminal
        .draw(|frame| render_list(frame, &single, Rect::new(0, 0, 40, height)))
        .expect("draw");
    rows(terminal.backend().buffer())
}

#[test]
fn last_of_thousand_renders_expanded_like_the_first() {
    let first = common::lazy_list(1000, DetailReveal::Step, 18);
    let first = reduce(first, [GreetingIntent::ToggleSelected]);
    let last = common::lazy_list(1000, DetailReveal::Step, 18);
    let last = reduce(
        last,
        [GreetingIntent::SelectLast, GreetingIntent::ToggleSelected],
    );

    let head = render_item(&list_view(&first, ToggleStyle::Button), 0);
    let tail = render_item(&list_view(&last, ToggleStyle::Button), 999);

    assert_eq!(head.len(), tail.len());
    assert!(head.iter().any(|row| row.contains(DETAIL_WORD)));
    for (y, (a, b)) in head.iter().zip(&tail).enumerate() {
        if y == 2 {
            // Subject row differs only by the subject itself.
            assert!(a.starts_with("│0 "));
            assert!(b.starts_with("│999"));
        } else {
            assert_eq!(a, b, "row {y} differs");
        }
    }
}

fn reduce(
    mut state: greeter::ui::greeting::GreetingListState,
    intents: impl IntoIterator<Item = GreetingIntent>,
) -> greeter::ui::greeting::GreetingListState {
    use greeter::ui::greeting::GreetingReducer;
    use greeter::ui::mvi::Reducer;
    for intent in intents {
        state = GreetingReducer::reduce(state, intent);
    }
    state
}
