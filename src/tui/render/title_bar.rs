use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

const TITLE: &str = " \u{26BD} Match Manager";

/// Render the title row and the separator under it
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = app.matches.len();
    let summary = format!(
        "{}  {} match{} ",
        app.store.path().display(),
        count,
        if count == 1 { "" } else { "es" }
    );

    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let title_w = display_width(TITLE);
    if title_w + 2 < width {
        let room = width - title_w - 2;
        let summary = truncate_to_width(&summary, room);
        let pad = width - title_w - display_width(&summary);
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
        spans.push(Span::styled(summary, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_file_and_count() {
        let app = app_with_matches(sample_matches());
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(output.contains("Match Manager"));
        assert!(output.contains("matches.json  2 matches"));
        assert!(output.lines().nth(1).unwrap().starts_with("\u{2500}\u{2500}"));
    }

    #[test]
    fn singular_count() {
        let mut matches = sample_matches();
        matches.truncate(1);
        let app = app_with_matches(matches);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(output.contains("matches.json  1 match"));
        assert!(!output.contains("1 matches"));
    }
}
