pub mod confirm_popup;
pub mod form_popup;
pub mod help_overlay;
pub mod message_popup;
pub mod status_row;
pub mod table_view;
pub mod title_bar;

mod helpers;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Draw one frame: title, table, status row, then any popups on top
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | table | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // table
            Constraint::Length(1), // status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    table_view::render_table_view(frame, app, chunks[1]);

    // Modal layers, bottom to top
    match app.mode {
        Mode::Form => form_popup::render_form_popup(frame, app, area),
        Mode::Confirm => confirm_popup::render_confirm_popup(frame, app, area),
        Mode::Navigate => {}
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.message.is_some() {
        message_popup::render_message_popup(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
