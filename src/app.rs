// src/app.rs

use std::sync::Arc;

use crate::core::locale::Locale;
use crate::core::scanner::{Operation, Outcome, ScanContext};

pub const SPINNER_CHARS: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub enum AppState {
    /// Shown once at start-up until acknowledged.
    Disclaimer,
    Menu,
    /// Collecting the URL for the chosen operation.
    Input(Operation),
    Running(Operation),
    Finished(Operation),
}

/// What the last session produced, or why its report could not be saved.
pub type SessionResult = Result<Outcome, String>;

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub context: Arc<ScanContext>,
    pub last_result: Option<SessionResult>,
    pub spinner_frame: usize,
    pub scroll_offset: u16,
}

impl App {
    pub fn new(context: ScanContext) -> Self {
        Self {
            should_quit: false,
            state: AppState::Disclaimer,
            input: String::new(),
            context: Arc::new(context),
            last_result: None,
            spinner_frame: 0,
            scroll_offset: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.context.locale
    }

    pub fn toggle_locale(&mut self) {
        let next = self.locale().next();
        self.context = Arc::new(self.context.with_locale(next));
    }

    pub fn choose(&mut self, operation: Operation) {
        self.input.clear();
        self.state = AppState::Input(operation);
    }

    /// Switches to `Running` and hands back what the session task needs.
    /// Returns `None` when there is nothing to run.
    pub fn start(&mut self) -> Option<(Operation, String)> {
        let AppState::Input(operation) = self.state else {
            return None;
        };
        let raw = self.input.trim().to_string();
        if raw.is_empty() {
            return None;
        }
        self.state = AppState::Running(operation);
        self.last_result = None;
        self.scroll_offset = 0;
        Some((operation, raw))
    }

    pub fn finish(&mut self, result: SessionResult) {
        if let AppState::Running(operation) = self.state {
            self.state = AppState::Finished(operation);
        }
        self.last_result = Some(result);
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AppState::Running(_))
    }

    pub fn on_tick(&mut self) {
        if self.is_running() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn back_to_menu(&mut self) {
        self.state = AppState::Menu;
        self.input.clear();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CollectorResult;
    use crate::core::scanner::stubs::{StubFetcher, StubResolver, context};

    fn app() -> App {
        App::new(context(Arc::new(StubFetcher::new()), StubResolver::Fail("unused".into())))
    }

    #[test]
    fn start_requires_a_url() {
        let mut app = app();
        app.choose(Operation::CountPages);
        assert!(app.start().is_none());

        app.input.push_str("  example.com ");
        assert_eq!(app.start(), Some((Operation::CountPages, "example.com".to_string())));
        assert!(app.is_running());
        assert!(app.start().is_none());
    }

    #[test]
    fn finish_moves_to_finished_and_keeps_result() {
        let mut app = app();
        app.choose(Operation::ResolveAddress);
        app.input.push_str("example.com");
        app.start();
        app.finish(Ok(Outcome::Address(CollectorResult::Ok("1.2.3.4".into()))));

        assert!(matches!(app.state, AppState::Finished(Operation::ResolveAddress)));
        assert!(matches!(app.last_result, Some(Ok(Outcome::Address(_)))));
    }

    #[test]
    fn locale_toggle_rebuilds_context() {
        let mut app = app();
        assert_eq!(app.locale(), Locale::En);
        app.toggle_locale();
        assert_eq!(app.locale(), Locale::Pt);
        assert_eq!(app.context.rules().rules()[0].message, "Página pode conter área administrativa exposta");
    }
}
