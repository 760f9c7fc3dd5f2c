// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, computed once per frame.
pub struct AppLayout {
    pub input: Rect,
    pub menu: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the frame into the URL input on top, the menu and results side by
/// side in the middle, and a one-line footer.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    AppLayout {
        input: main_chunks[0],
        menu: content_chunks[0],
        results: content_chunks[1],
        footer: main_chunks[2],
    }
}
