// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::Paragraph,
};
use rust_i18n::t;

/// Renders the one-line key hint bar for the current state.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale().code();
    let hint = match app.state {
        AppState::Disclaimer => t!("ui.disclaimer_continue", locale = locale),
        AppState::Menu => t!("ui.footer_menu", locale = locale),
        AppState::Input(_) => t!("ui.footer_input", locale = locale),
        AppState::Running(_) => t!("ui.footer_running", locale = locale),
        AppState::Finished(_) => t!("ui.footer_finished", locale = locale),
    };

    let footer = Paragraph::new(Line::from(hint.into_owned()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
