//! arena_tui - Terminal front end for the arena battle loop

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> io::Result<()> {
    setup_logging()?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let mut app = App::from_config_path(config_path.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Char('a'), _) | (KeyCode::Char(' '), _) => app.attack(),
                    (KeyCode::Char('s'), _) => app.toggle_shield(),
                    (KeyCode::Char('r'), _) => app.restart(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.scroll_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.scroll_down(),
                    _ => {}
                }
            }
        }

        // Parry windows run on game time
        app.tick(0.1);
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// File-only logging; stderr belongs to the terminal UI
fn setup_logging() -> io::Result<()> {
    let log_dir = std::env::var_os("ARENA_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("arena_tui"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "arena.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!("Log file: {}", log_dir.join("arena.log").display());
    Ok(())
}
