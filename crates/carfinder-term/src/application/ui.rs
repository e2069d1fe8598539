use std::io;

use anyhow::Result;
use chrono::Datelike;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::views;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

/// Calendar year on the local clock, read once per frame so the year list
/// follows a New Year rollover in a long-running session.
pub fn current_year() -> i32 {
    return chrono::Local::now().year();
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut app_state = AppState::new(app_state_props, &tx)?;

    loop {
        app_state.set_current_year(current_year());
        terminal.draw(|frame| views::render(frame, &app_state))?;

        let event = events.next().await?;
        app_state.handle_event(event, &tx)?;

        if app_state.should_quit {
            tracing::info!(route = %app_state.current_route(), "quitting");
            break;
        }
    }

    return Ok(());
}

/// Takes over the terminal for the lifetime of the UI and hands it back
/// afterwards, whether the loop ended cleanly or not.
pub async fn start_ui(
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}
