use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::broadcast::{self, error::TryRecvError};

use super::app::InteractiveApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::cli_context::CliContext;
use crate::client::{ApiClient, AuthEvent};
use crate::constants::TICK_RATE_MS;
use crate::error::{ClubError, ClubResult};
use crate::logging::{describe_panic, get_log_file_path, log_debug, log_info, log_panic_info};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(e: io::Error) -> ClubError {
    ClubError::TerminalError(e.to_string())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Put the terminal back before the default panic output, so the message
/// is readable and the shell is usable again.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        log_panic_info(info);

        eprintln!("\nOops! Something went wrong and the interface had to close.");
        eprintln!("Restart it with 'csquare tui'.");
        if let Some(path) = get_log_file_path() {
            eprintln!("Details were written to {}", path.display());
        }
        if cfg!(debug_assertions) {
            eprintln!("{}", describe_panic(info));
            previous(info);
        }
    }));
}

fn setup_terminal() -> ClubResult<Tui> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(terminal_error)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)
}

pub async fn run_tui(context: CliContext) -> ClubResult<()> {
    log_info("Starting interactive mode");

    let panel = context.admin_panel()?;
    let mut auth_events = panel.api.backend().subscribe();

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new(panel);
    let result = event_loop(&mut terminal, &mut app, &mut auth_events).await;

    restore_terminal();
    terminal.show_cursor().map_err(terminal_error)?;
    log_info("Exiting interactive mode");

    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut InteractiveApp<ApiClient>,
    auth_events: &mut broadcast::Receiver<AuthEvent>,
) -> ClubResult<()> {
    app.busy = true;
    terminal
        .draw(|f| super::ui::draw(f, app))
        .map_err(terminal_error)?;
    app.start().await;
    app.busy = false;

    let events = EventHandler::new(TICK_RATE_MS);

    loop {
        let width = terminal.size().map_err(terminal_error)?.width;
        app.set_viewport(width);

        terminal
            .draw(|f| super::ui::draw(f, app))
            .map_err(terminal_error)?;

        let event = events
            .recv()
            .map_err(|e| ClubError::TerminalError(format!("Event channel closed: {}", e)))?;

        match event {
            Event::Key(key) => {
                let action = map_key(key, &app.key_context());
                log_debug(&format!("Key {:?} -> {:?}", key.code, action));
                if let Some(task) = app.handle_action(action) {
                    // Show the busy state while the request runs
                    app.busy = true;
                    terminal
                        .draw(|f| super::ui::draw(f, app))
                        .map_err(terminal_error)?;
                    app.run_task(task).await;
                }
            }
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize => {}
            Event::Tick => app.on_tick(),
        }

        loop {
            match auth_events.try_recv() {
                Ok(event) => {
                    log_debug(&format!("Auth event: {:?}", event));
                    app.on_unauthorized();
                }
                Err(TryRecvError::Lagged(_)) => app.on_unauthorized(),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
