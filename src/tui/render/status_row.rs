use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

const NAVIGATE_HINTS: &str = "a add  e edit  d delete  D delete all  ? help  q quit";
const FORM_HINTS: &str = "Tab next  Shift-Tab prev  Enter save  Esc cancel";
const CONFIRM_HINTS: &str = "y confirm  n cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, left_style) = match app.mode {
        Mode::Navigate => match &app.status_message {
            Some(status) => (
                status.as_str(),
                Style::default().fg(app.theme.green).bg(bg),
            ),
            None if app.show_key_hints => {
                (NAVIGATE_HINTS, Style::default().fg(app.theme.dim).bg(bg))
            }
            None => ("", Style::default().bg(bg)),
        },
        Mode::Form => (FORM_HINTS, Style::default().fg(app.theme.dim).bg(bg)),
        Mode::Confirm => (CONFIRM_HINTS, Style::default().fg(app.theme.yellow).bg(bg)),
    };

    let right = match app.selected_index() {
        Some(i) => format!("{}/{} ", i + 1, app.matches.len()),
        None => String::new(),
    };
    let right_w = display_width(&right);

    let left = truncate_to_width(&format!(" {}", left), width.saturating_sub(right_w + 1));
    let pad = width.saturating_sub(display_width(&left) + right_w);

    let line = Line::from(vec![
        Span::styled(left, left_style),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn navigate_shows_hints_and_position() {
        let mut app = app_with_matches(sample_matches());
        app.cursor = 1;
        let output = row(&app);
        assert!(output.starts_with(" a add  e edit"));
        assert!(output.ends_with("2/2"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let mut app = app_with_matches(sample_matches());
        app.status_message = Some("added Ajax vs PSV".into());
        let output = row(&app);
        assert!(output.contains("added Ajax vs PSV"));
        assert!(!output.contains("a add"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = app_with_matches(Vec::new());
        app.show_key_hints = false;
        assert_eq!(row(&app), "");
    }

    #[test]
    fn form_and_confirm_hints() {
        let mut app = app_with_matches(Vec::new());
        app.mode = Mode::Form;
        assert!(row(&app).contains("Enter save"));
        app.mode = Mode::Confirm;
        assert!(row(&app).contains("y confirm"));
    }
}
