// src/ui/mod.rs

use crate::app::{App, AppState};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::menu::render_menu(frame, app, layout.menu);
    widgets::input::render_input(frame, app, layout.input);
    widgets::results::render_results(frame, app, layout.results);
    widgets::footer::render_footer(frame, app, layout.footer);

    if let AppState::Disclaimer = app.state {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, app, area);
    }
}
