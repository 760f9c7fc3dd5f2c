// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, AppState, SessionResult};
use crate::core::scanner::{self, Operation, ScanContext};

rust_i18n::i18n!("locales", fallback = "en");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let settings = config::load()?;
    let context = ScanContext::from_settings(&settings)?;
    info!(locale = settings.locale.code(), "TraçuS starting.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, App::new(context)).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }

        if let Ok(result) = rx.try_recv() {
            app.finish(result);
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<SessionResult>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Disclaimer => {
                    if key.code == KeyCode::Enter {
                        app.back_to_menu();
                    }
                }
                AppState::Menu => handle_menu_input(app, key.code),
                AppState::Input(_) => handle_url_input(app, key.code, tx),
                AppState::Running(_) => {
                    if key.code == KeyCode::Char('q') {
                        app.quit();
                    }
                }
                AppState::Finished(_) => handle_finished_input(app, key.code),
            }
        }
    }
    Ok(())
}

fn handle_menu_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('0') | KeyCode::Esc => app.quit(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_locale(),
        KeyCode::Char(c) => {
            if let Some(operation) = Operation::from_shortcut(c) {
                app.choose(operation);
            }
        }
        _ => {}
    }
}

/// Collects the URL and, on Enter, runs the session on a background task so
/// the UI keeps drawing. No other operation is accepted until it reports back.
fn handle_url_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<SessionResult>) {
    match key_code {
        KeyCode::Esc => app.back_to_menu(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            let Some((operation, raw_input)) = app.start() else {
                return;
            };
            let context = app.context.clone();
            let tx_clone = tx.clone();

            tokio::spawn(async move {
                let result = scanner::run_operation(&context, operation, &raw_input)
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Report generation failed.");
                        e.to_string()
                    });
                let _ = tx_clone.send(result).await;
            });
        }
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Enter | KeyCode::Esc => app.back_to_menu(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
