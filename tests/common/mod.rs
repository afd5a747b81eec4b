//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use greeter::config::{Config, Revision, SessionStore};
use greeter::ui::animation::SpringSpec;
use greeter::ui::app::App;
use greeter::ui::greeting::{
    DetailReveal, GreetingListState, GreetingSubject, ListSettings, ListStrategy,
};
use greeter::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

pub fn config(revision: Revision) -> Config {
    Config {
        revision,
        ..Config::default()
    }
}

/// App for `revision` without persistence, sized to the test terminal.
pub fn app(revision: Revision) -> App {
    let mut app = App::new(&config(revision), None);
    app.on_resize(WIDTH, HEIGHT);
    app
}

/// Lazy list over `"0".."count-1"` with the given reveal and viewport.
pub fn lazy_list(count: usize, reveal: DetailReveal, viewport_rows: u16) -> GreetingListState {
    use greeter::ui::greeting::{GreetingIntent, GreetingReducer};
    use greeter::ui::mvi::Reducer;

    let state = GreetingListState::new(
        GreetingSubject::generated(count),
        ListSettings {
            strategy: ListStrategy::Lazy { prefetch: 1 },
            reveal,
            ..ListSettings::default()
        },
    );
    GreetingReducer::reduce(
        state,
        GreetingIntent::Resize {
            rows: viewport_rows,
        },
    )
}

pub fn spring_reveal() -> DetailReveal {
    DetailReveal::Spring(SpringSpec::default())
}

/// Draw the whole app into an off-screen buffer.
pub fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Buffer contents as one string per row.
pub fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    rows(buffer).join("\n")
}

/// Session store in a fresh temporary directory.
pub fn temp_session() -> (TempDir, SessionStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::new(temp_dir.path().join("greeter").join("session.toml"));
    (temp_dir, store)
}

/// Write `content` to a config file in a fresh temporary directory.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
