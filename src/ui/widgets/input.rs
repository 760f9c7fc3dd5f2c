// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use rust_i18n::t;
use crate::app::{App, AppState};

/// Renders the URL input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale().code();
    let title = match app.state {
        AppState::Input(operation) | AppState::Running(operation) | AppState::Finished(operation) => {
            format!("{} · {}", operation.label(app.locale()), t!("ui.input_title", locale = locale))
        }
        _ => t!("ui.input_title", locale = locale).into_owned(),
    };

    let input_block = Block::default().borders(Borders::ALL).title(title);
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // The cursor only shows while a URL is being typed.
    if let AppState::Input(_) = app.state {
        frame.set_cursor_position((area.x + app.input.chars().count() as u16 + 1, area.y + 1));
    }
}
