use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::fixture::Match;
use crate::tui::app::App;
use crate::util::unicode::{display_width, fit_to_width};

const NUM_W: usize = 3;
const DATE_W: usize = 10;
const TIME_W: usize = 5;
// Leading space plus one space between each of the seven columns
const GAPS_W: usize = 7;

/// Column widths for a given total width: number, home, away, date, time,
/// home logo, away logo. The four text columns share what is left evenly.
pub fn column_widths(total: usize) -> [usize; 7] {
    let flex = total.saturating_sub(NUM_W + DATE_W + TIME_W + GAPS_W);
    let quarter = flex / 4;
    [
        NUM_W,
        quarter,
        quarter,
        DATE_W,
        TIME_W,
        quarter,
        flex - 3 * quarter,
    ]
}

/// Render the match table: a header row, then one row per match
pub fn render_table_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let widths = column_widths(area.width as usize);

    let header_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let header = [
        "#",
        "Home Team",
        "Away Team",
        "ddmmyyyy",
        "Time",
        "Home Logo",
        "Away Logo",
    ];
    let mut lines: Vec<Line> = vec![row_line(&header.map(String::from), &widths, header_style, true)];

    if app.matches.is_empty() {
        lines.push(Line::from(Span::styled(
            " No matches yet. Press a to add one.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor row on screen
    let visible = (area.height as usize).saturating_sub(1).max(1);
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }

    for (i, m) in app
        .matches
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
    {
        let is_cursor = i == app.cursor;
        let (fg, row_bg) = if is_cursor {
            (app.theme.text_bright, app.theme.selection_bg)
        } else {
            (app.theme.text, bg)
        };
        let mut style = Style::default().fg(fg).bg(row_bg);
        if is_cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        let mut line = row_line(&cells(i, m), &widths, style, false);
        if is_cursor {
            pad_line(&mut line, area.width as usize, row_bg);
        }
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn cells(index: usize, m: &Match) -> [String; 7] {
    [
        (index + 1).to_string(),
        m.home_team.clone(),
        m.away_team.clone(),
        m.fixture_date.clone(),
        m.fixture_time.clone(),
        m.home_logo.clone(),
        m.away_logo.clone(),
    ]
}

fn row_line<'a>(cells: &[String; 7], widths: &[usize; 7], style: Style, header: bool) -> Line<'a> {
    let mut text = String::from(" ");
    for (col, (cell, w)) in cells.iter().zip(widths.iter()).enumerate() {
        if col > 0 {
            text.push(' ');
        }
        // Number column is right-aligned
        if col == 0 && !header {
            text.push_str(&format!("{:>width$}", cell, width = *w));
        } else {
            text.push_str(&fit_to_width(cell, *w));
        }
    }
    Line::from(Span::styled(text, style))
}

fn pad_line(line: &mut Line, width: usize, bg: Color) {
    let content: usize = line.spans.iter().map(|s| display_width(&s.content)).sum();
    if content < width {
        line.spans
            .push(Span::styled(" ".repeat(width - content), Style::default().bg(bg)));
    }
}
