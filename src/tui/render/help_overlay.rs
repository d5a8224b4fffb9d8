use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const LIST_KEYS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}/jk", "Move selection"),
    ("PgUp/PgDn", "Move ten rows"),
    ("g/G", "Jump to first/last match"),
    ("a", "Add a match"),
    ("e/Enter", "Edit the selected match"),
    ("d/x/Del", "Delete the selected match"),
    ("D", "Delete all matches"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab/\u{2193}", "Next field"),
    ("S-Tab/\u{2191}", "Previous field"),
    ("\u{2190}\u{2192}", "Move within the field"),
    ("Home/End", "Start/end of the field"),
    ("Ctrl-U", "Clear the field"),
    ("Enter", "Save the match"),
    ("Esc", "Cancel without saving"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
        Line::from(Span::styled(" Match list", header_style)),
    ];
    for (key, desc) in LIST_KEYS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Match form", header_style)));
    for (key, desc) in FORM_KEYS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Dates are entered as ddmmyyyy, e.g. 20102025",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("   {:<14}", key), key_style),
        Span::styled(desc, desc_style),
    ]));
}
