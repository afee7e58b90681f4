//! Terminal User Interface (TUI) module
//!
//! Mounts the view controller (which starts polling) and redraws from state
//! snapshots until the user quits.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
#[cfg(test)]
mod test_support;
mod ui;

use crate::config::ViewConfig;
use crate::view::ViewController;
use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(
    controller: Arc<ViewController>,
    config: &ViewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    controller.mount();

    let mut app = App::new(Arc::clone(&controller));
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Tear down before restoring the terminal so late responses are dropped
    controller.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    info!("TUI exited");
    Ok(())
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        let state = app.controller.snapshot();
        terminal.draw(|f| ui(f, app, &state))?;

        // event::poll 是阻塞调用，放到 blocking 线程，避免占用 runtime worker
        let next = tokio::task::spawn_blocking(move || -> io::Result<Option<Event>> {
            if event::poll(tick_rate)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
        .await
        .map_err(io::Error::other)??;

        if let Some(Event::Key(key)) = next
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            return Ok(());
        }
    }
}
