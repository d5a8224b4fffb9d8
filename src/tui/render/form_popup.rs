use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::form::FormField;
use crate::tui::app::{App, FormState};
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

use super::helpers::centered_rect_fixed;

const LABEL_W: usize = 16;

/// Render the add/edit form popup
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let fs = match &app.form_state {
        Some(fs) => fs,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let focus_label_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let auto_style = Style::default().fg(app.theme.dim).bg(bg);
    let cursor_style = Style::default()
        .fg(bg)
        .bg(app.theme.text_bright);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w = 72u16.min(area.width.saturating_sub(2));
    // Borders (2), label column, ": " separator, leading space
    let value_w = (popup_w as usize).saturating_sub(2 + LABEL_W + 3);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", fs.title()), header_style)));
    lines.push(Line::from(""));

    for field in FormField::ALL {
        let focused = field == fs.focus;
        let mut spans = vec![Span::styled(
            format!(" {:>width$}: ", field.label(), width = LABEL_W),
            if focused { focus_label_style } else { label_style },
        )];
        let text = fs.form.get(field);
        if focused {
            push_cursor_spans(&mut spans, text, fs.cursor, value_w, value_style, cursor_style);
        } else if is_auto_logo(fs, field) && !text.is_empty() {
            let shown = truncate_to_width(text, value_w.saturating_sub(7));
            spans.push(Span::styled(shown, value_style));
            spans.push(Span::styled(" (auto)", auto_style));
        } else {
            spans.push(Span::styled(truncate_to_width(text, value_w), value_style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ", label_style),
        Span::styled("Tab", dim_style),
        Span::styled(" next  ", label_style),
        Span::styled("Enter", dim_style),
        Span::styled(" save  ", label_style),
        Span::styled("Esc", dim_style),
        Span::styled(" cancel", label_style),
    ]));

    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn is_auto_logo(fs: &FormState, field: FormField) -> bool {
    match field {
        FormField::HomeLogo => !fs.form.home_logo_touched,
        FormField::AwayLogo => !fs.form.away_logo_touched,
        _ => false,
    }
}

/// Text before the cursor, the cursor cell, and text after it, scrolled so
/// the cursor stays inside `width` cells.
fn push_cursor_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    cursor: usize,
    width: usize,
    style: Style,
    cursor_style: Style,
) {
    let cursor = cursor.min(text.len());
    let before = &text[..cursor];
    let (at, after) = match text[cursor..].graphemes(true).next() {
        Some(g) => (g.to_string(), &text[cursor + g.len()..]),
        None => (" ".to_string(), ""),
    };

    let at_w = display_width(&at);
    let before = tail_to_width(before, width.saturating_sub(at_w));
    let used = display_width(&before) + at_w;
    let after = truncate_to_width(after, width.saturating_sub(used));

    spans.push(Span::styled(before, style));
    spans.push(Span::styled(at, cursor_style));
    spans.push(Span::styled(after, style));
}
