// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use rust_i18n::t;

use crate::app::App;

/// Renders the start-up disclaimer on top of the existing UI.
///
/// `Clear` wipes the popup area first so the screen underneath does not bleed
/// through.
pub fn render_disclaimer_popup(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale().code();
    let disclaimer_text = Text::from(vec![
        Line::from(t!("ui.disclaimer_heading", locale = locale).into_owned().bold().yellow()),
        Line::from(""),
        Line::from(t!("ui.disclaimer_body", locale = locale).into_owned()),
        Line::from(""),
        Line::from(t!("ui.disclaimer_continue", locale = locale).into_owned().bold()),
    ]);

    let block = Block::default()
        .title(t!("ui.disclaimer_title", locale = locale).into_owned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(60, 40, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A `Rect` of the given percentage size, centered within `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
