use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::helpers::centered_rect_fixed;

const MAX_W: u16 = 64;

/// Render the blocking info/warning/error popup
pub fn render_message_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(msg) = &app.message else {
        return;
    };

    let bg = app.theme.background;
    let accent = app.theme.message_color(msg.kind);

    let body_w = display_width(&msg.body) + 2;
    let title_w = display_width(&msg.title) + 4;
    let popup_w = (body_w.max(title_w) as u16 + 2).clamp(28, MAX_W);
    let inner_w = (popup_w as usize).saturating_sub(2).max(1);
    let body_lines = body_w.div_ceil(inner_w) as u16;
    let popup_h = body_lines + 5;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", msg.body),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Enter",
                Style::default()
                    .fg(accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ok", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", msg.title),
            Style::default()
                .fg(accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
