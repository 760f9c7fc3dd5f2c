// src/ui/widgets/menu.rs

use crate::app::{App, AppState};
use crate::core::scanner::Operation;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use rust_i18n::t;
use strum::IntoEnumIterator;

/// Renders the option list. The operation in progress or on screen is highlighted.
pub fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale();
    let active = match app.state {
        AppState::Input(op) | AppState::Running(op) | AppState::Finished(op) => Some(op),
        _ => None,
    };

    let mut lines = vec![Line::from("")];
    for operation in Operation::iter() {
        let style = if Some(operation) == active {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", operation.shortcut()), Style::default().fg(Color::Yellow).bold()),
            Span::styled(format!("→ {}", operation.label(locale)), style),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(" 0 ", Style::default().fg(Color::Yellow).bold()),
        Span::styled(format!("→ {}", t!("menu.exit", locale = locale.code())), Style::default().fg(Color::Red)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" [L] {}", locale.code().to_uppercase()),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(t!("menu.title", locale = locale.code()).into_owned())
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
