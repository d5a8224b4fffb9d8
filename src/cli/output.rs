use serde::Serialize;

use crate::model::fixture::Match;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// A match as printed by `--json`: its list number plus the stored record
#[derive(Serialize)]
pub struct NumberedMatchJson<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub record: &'a Match,
}

/// Result of a delete or clear
#[derive(Serialize)]
pub struct DeletedJson {
    pub deleted: usize,
}

pub fn numbered(matches: &[Match]) -> Vec<NumberedMatchJson<'_>> {
    matches
        .iter()
        .enumerate()
        .map(|(i, record)| NumberedMatchJson {
            number: i + 1,
            record,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One-line summary: number, date, time and the pairing
pub fn format_match_line(number: usize, m: &Match) -> String {
    let mut line = format!("{:>3}  {}", number, m.fixture_date);
    if !m.fixture_time.is_empty() {
        line.push(' ');
        line.push_str(&m.fixture_time);
    }
    line.push_str("  ");
    line.push_str(&m.title());
    line
}

/// Multi-line view of every field, used after add and edit
pub fn format_match_detail(number: usize, m: &Match) -> Vec<String> {
    let mut lines = vec![format_match_line(number, m)];
    if !m.stream_source.is_empty() {
        lines.push(format!("     stream: {}", m.stream_source));
    }
    lines.push(format!("     home logo: {}", m.home_logo));
    lines.push(format!("     away logo: {}", m.away_logo));
    lines
}
