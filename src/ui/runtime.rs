use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

pub fn run(mut app: App, frame_interval: Duration, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(frame_interval, shutdown.clone());
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);

    let mut last_tick = Instant::now();
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }
        if shutdown.is_shutting_down() {
            tracing::info!("Shutdown signal received");
            break;
        }

        match events.next(frame_interval) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => {
                let now = Instant::now();
                app.on_tick(now.duration_since(last_tick));
                last_tick = now;
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.persist_session();
    drop(guard);
    Ok(())
}
