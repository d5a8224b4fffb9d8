use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::helpers::centered_rect_fixed;

/// Render the yes/no confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(cs) = &app.confirm_state else {
        return;
    };

    let bg = app.theme.background;
    let accent = app.theme.yellow;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let key_style = Style::default()
        .fg(accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", cs.prompt), text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", key_style),
            Span::styled(" yes  ", desc_style),
            Span::styled("n", key_style),
            Span::styled(" no", desc_style),
        ]),
    ];

    let prompt_w = display_width(&cs.prompt) + 1;
    let content_w = prompt_w.max(display_width(&cs.title) + 2) + 3;
    let popup_w = (content_w as u16).clamp(30, 70);
    let inner_w = (popup_w as usize).saturating_sub(2).max(1);
    let prompt_lines = prompt_w.div_ceil(inner_w) as u16;
    let popup_h = 5 + prompt_lines;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", cs.title),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{ConfirmAction, ConfirmState, Mode};
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_title_prompt_and_keys() {
        let mut app = app_with_matches(sample_matches());
        app.mode = Mode::Confirm;
        app.confirm_state = Some(ConfirmState {
            title: "Confirm Delete".into(),
            prompt: "Delete Ajax vs PSV?".into(),
            action: ConfirmAction::DeleteMatch { index: 1 },
        });
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Confirm Delete"));
        assert!(output.contains("Delete Ajax vs PSV?"));
        assert!(output.contains("y yes  n no"));
    }

    #[test]
    fn nothing_without_state() {
        let app = app_with_matches(Vec::new());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
