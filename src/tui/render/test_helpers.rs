use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::io::store::MatchStore;
use crate::model::config::UiConfig;
use crate::model::fixture::Match;
use crate::tui::app::App;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

/// Plain text of a buffer, trailing spaces and blank lines trimmed
pub fn buffer_text(buf: &Buffer) -> String {
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over the given matches. The store path is never written by
/// render tests.
pub fn app_with_matches(matches: Vec<Match>) -> App {
    App::with_matches(
        MatchStore::new("/tmp/matchbook-render-test/matches.json"),
        matches,
        &UiConfig::default(),
    )
}

pub fn sample_matches() -> Vec<Match> {
    vec![
        Match {
            home_team: "Real Madrid".into(),
            away_team: "Barcelona".into(),
            stream_source: "https://example.test/elclasico".into(),
            fixture_date: "20102025".into(),
            fixture_time: "20:00".into(),
            home_logo: "/logos/Real_Madrid.png".into(),
            away_logo: "/logos/Barcelona.png".into(),
        },
        Match {
            home_team: "Ajax".into(),
            away_team: "PSV".into(),
            stream_source: String::new(),
            fixture_date: "01082025".into(),
            fixture_time: "14:30".into(),
            home_logo: "/logos/Ajax.png".into(),
            away_logo: "/img/psv.svg".into(),
        },
    ]
}
