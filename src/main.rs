//! Cabana - a solo tile-laying word game in the terminal
//!
//! Lay every tile into one connected crossword. Boogie when the board is
//! clean, Spin when a letter won't fit.

mod app;
mod config;
mod game;
mod tui;

use anyhow::{Context, Result};
use app::{AppCoordinator, Screen};
use config::GameConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use game::Dictionary;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tui::Tui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = GameConfig::from_env();
    let _guard = setup_logging()?;
    tracing::info!(?config, "starting");

    let dictionary = Arc::new(Dictionary::new());
    spawn_dictionary_loader(&config, Arc::clone(&dictionary));

    let mut coordinator = AppCoordinator::new(config, dictionary);

    let mut terminal = Tui::new().context("failed to open terminal")?;
    terminal.enter().context("failed to enter raw mode")?;

    let result = run(&mut terminal, &mut coordinator);
    terminal.exit().context("failed to restore terminal")?;
    result
}

fn run(terminal: &mut Tui, coordinator: &mut AppCoordinator) -> Result<()> {
    loop {
        terminal.draw(|frame| tui::render(frame, coordinator))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(coordinator, key);
                }
            }
        }

        coordinator.poll();

        if coordinator.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}

fn handle_key(coordinator: &mut AppCoordinator, key: KeyEvent) {
    let app = match &mut coordinator.screen {
        Screen::Playing { app } => app,
        Screen::Menu { .. } => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => coordinator.menu_up(),
                KeyCode::Down | KeyCode::Char('j') => coordinator.menu_down(),
                KeyCode::Enter => coordinator.menu_select(),
                KeyCode::Esc | KeyCode::Char('q') => coordinator.quit(),
                _ => {}
            }
            return;
        }
    };

    match key.code {
        KeyCode::Esc => {
            // Esc cancels a move first; otherwise it leaves the game
            if !app.cancel_move() {
                coordinator.go_to_menu();
            }
        }
        KeyCode::Char('q') => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Tab => app.cycle_rack(true),
        KeyCode::BackTab => app.cycle_rack(false),
        KeyCode::Enter => app.on_drop(),
        KeyCode::Char('m') => app.on_pick_up(),
        KeyCode::Backspace | KeyCode::Char('r') => app.on_return(),
        KeyCode::Char('s') => app.on_spin_rack(),
        KeyCode::Char('S') => app.on_spin_board(),
        _ => {}
    }
}

/// Load the word list off the UI thread; the game starts before it finishes.
fn spawn_dictionary_loader(config: &GameConfig, dictionary: Arc<Dictionary>) {
    let Some(path) = config.wordlist() else {
        tracing::warn!("no word list location available; only two-letter words will validate");
        dictionary.mark_unavailable("no word list location");
        return;
    };

    thread::spawn(move || {
        if let Err(e) = dictionary.load_path(&path) {
            tracing::warn!(path = %path.display(), error = %e, "word list unavailable");
            dictionary.mark_unavailable(e.to_string());
        }
    });
}

/// Log to a file under the cache directory; the terminal belongs to the UI.
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = config::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "cabana.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("log file: {}/cabana.log", log_dir.display());
    Ok(guard)
}
