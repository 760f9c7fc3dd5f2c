// src/ui/widgets/results.rs

use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph, Wrap}};
use rust_i18n::t;

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::locale::Locale;
use crate::core::models::{CollectorResult, OwnershipRecord};
use crate::core::scanner::Outcome;

/// Renders the results pane for the current state.
pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(t!("ui.results_title", locale = locale.code()).into_owned());

    let paragraph = match (&app.state, &app.last_result) {
        (AppState::Running(_), _) => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{spinner_char} "), Style::default().fg(Color::Cyan)),
                Span::raw(t!("ui.running", locale = locale.code()).into_owned()),
            ]))
            .alignment(Alignment::Center)
        }
        (AppState::Finished(_), Some(Ok(outcome))) => Paragraph::new(outcome_lines(outcome, locale))
            .wrap(Wrap { trim: false })
            .scroll((app.scroll_offset, 0)),
        (AppState::Finished(_), Some(Err(e))) => Paragraph::new(Line::from(Span::styled(
            t!("report.failed", locale = locale.code(), error = e).into_owned(),
            Style::default().fg(Color::Red).bold(),
        )))
        .wrap(Wrap { trim: true }),
        _ => Paragraph::new(t!("ui.idle_hint", locale = locale.code()).into_owned())
            .alignment(Alignment::Center),
    };

    frame.render_widget(paragraph.block(block), area);
}

/// Turns a session outcome into styled lines.
fn outcome_lines(outcome: &Outcome, locale: Locale) -> Vec<Line<'static>> {
    let lang = locale.code();
    let mut lines = Vec::new();

    match outcome {
        Outcome::PageCount(result) => {
            lines.push(value_line(t!("ui.pages_found", locale = lang, count = result.value()).into_owned(), result));
            push_degraded(&mut lines, result, locale);
        }
        Outcome::Address(result) => {
            lines.push(value_line(t!("ui.site_ip", locale = lang, address = result.value()).into_owned(), result));
            push_degraded(&mut lines, result, locale);
        }
        Outcome::Findings(result) => {
            lines.push(Line::from(
                t!("ui.findings_title", locale = lang).into_owned().red().bold(),
            ));
            for finding in result.value() {
                lines.push(Line::from(format!("- {finding}")));
            }
        }
        Outcome::Ownership(result) => {
            lines.push(Line::from(t!("ui.owner_title", locale = lang).into_owned().magenta().bold()));
            lines.extend(ownership_lines(result.value(), locale));
        }
        Outcome::Report { path, report } => {
            lines.push(Line::from(
                t!("report.saved", locale = lang, path = path.display()).into_owned().green().bold(),
            ));
            lines.push(Line::from(""));
            lines.extend(report.render(locale).lines().map(|l| Line::from(l.to_string())));
        }
    }
    lines
}

fn value_line<T>(text: String, result: &CollectorResult<T>) -> Line<'static> {
    let style = if result.is_degraded() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green).bold()
    };
    Line::from(Span::styled(text, style))
}

fn push_degraded<T>(lines: &mut Vec<Line<'static>>, result: &CollectorResult<T>, locale: Locale) {
    if let Some(message) = result.message() {
        lines.push(Line::from(Span::styled(
            t!("ui.degraded", locale = locale.code(), message = message).into_owned(),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

/// Two-column field/value table; an error record is shown in red.
fn ownership_lines(record: &OwnershipRecord, locale: Locale) -> Vec<Line<'static>> {
    let value_style = if record.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Magenta)
    };
    let width = record.entries().map(|(k, _)| k.chars().count()).max().unwrap_or(0).max(6);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{:<width$}  ", t!("ui.field", locale = locale.code())),
            Style::default().bold(),
        ),
        Span::styled(t!("ui.value", locale = locale.code()).into_owned(), Style::default().bold()),
    ])];
    for (key, value) in record.entries() {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:<width$}  "), Style::default().fg(Color::Cyan)),
            Span::styled(value.to_string(), value_style),
        ]));
    }
    lines
}
