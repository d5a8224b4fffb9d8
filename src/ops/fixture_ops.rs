use serde::Serialize;

use crate::io::store::{MatchStore, StoreError};
use crate::model::fixture::Match;
use crate::ops::validate::parse_date;

/// Error type for list mutations
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("match index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

// Every mutation flushes the whole list. If the flush fails the list is put
// back, so memory never runs ahead of the file.
fn commit(store: &MatchStore, matches: &mut Vec<Match>, previous: Vec<Match>) -> Result<(), OpsError> {
    if let Err(e) = store.save(matches) {
        *matches = previous;
        return Err(e.into());
    }
    Ok(())
}

/// Append a match and persist.
pub fn add_match(store: &MatchStore, matches: &mut Vec<Match>, m: Match) -> Result<(), OpsError> {
    let previous = matches.clone();
    matches.push(m);
    commit(store, matches, previous)
}

/// Replace the match at `index` (0-based) and persist.
pub fn replace_match(
    store: &MatchStore,
    matches: &mut Vec<Match>,
    index: usize,
    m: Match,
) -> Result<(), OpsError> {
    if index >= matches.len() {
        return Err(OpsError::IndexOutOfRange(index));
    }
    let previous = matches.clone();
    matches[index] = m;
    commit(store, matches, previous)
}

/// Remove the match at `index` (0-based), persist, and return it.
pub fn remove_match(
    store: &MatchStore,
    matches: &mut Vec<Match>,
    index: usize,
) -> Result<Match, OpsError> {
    if index >= matches.len() {
        return Err(OpsError::IndexOutOfRange(index));
    }
    let previous = matches.clone();
    let removed = matches.remove(index);
    commit(store, matches, previous)?;
    Ok(removed)
}

/// Remove every match and persist. An empty list is left alone and the file
/// is not touched. Returns how many matches were removed.
pub fn clear_matches(store: &MatchStore, matches: &mut Vec<Match>) -> Result<usize, OpsError> {
    if matches.is_empty() {
        return Ok(0);
    }
    let previous = std::mem::take(matches);
    let count = previous.len();
    commit(store, matches, previous)?;
    Ok(count)
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

/// Structured result from `mb check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub problems: Vec<CheckProblem>,
}

/// Something a hand-edited file can get wrong. `number` is 1-based, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckProblem {
    #[serde(rename = "invalid_date")]
    InvalidDate { number: usize, date: String },
    #[serde(rename = "blank_logo")]
    BlankLogo { number: usize, side: Side },
    /// The file exists but is not a JSON list of matches
    #[serde(rename = "unreadable_file")]
    UnreadableFile { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl std::fmt::Display for CheckProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckProblem::InvalidDate { number, date } => {
                write!(f, "#{}: invalid date \"{}\" (expected ddmmyyyy)", number, date)
            }
            CheckProblem::BlankLogo { number, side } => {
                let side = match side {
                    Side::Home => "home",
                    Side::Away => "away",
                };
                write!(f, "#{}: {} logo is blank", number, side)
            }
            CheckProblem::UnreadableFile { error } => write!(f, "{}", error),
        }
    }
}

impl CheckResult {
    /// Result for a file that could not be read at all
    pub fn unreadable(error: impl std::fmt::Display) -> Self {
        CheckResult {
            valid: false,
            problems: vec![CheckProblem::UnreadableFile {
                error: error.to_string(),
            }],
        }
    }
}

/// Validate loaded records against the rules a save enforces.
pub fn check_matches(matches: &[Match]) -> CheckResult {
    let mut problems = Vec::new();
    for (i, m) in matches.iter().enumerate() {
        let number = i + 1;
        if parse_date(&m.fixture_date).is_none() {
            problems.push(CheckProblem::InvalidDate {
                number,
                date: m.fixture_date.clone(),
            });
        }
        if m.home_logo.trim().is_empty() {
            problems.push(CheckProblem::BlankLogo {
                number,
                side: Side::Home,
            });
        }
        if m.away_logo.trim().is_empty() {
            problems.push(CheckProblem::BlankLogo {
                number,
                side: Side::Away,
            });
        }
    }
    CheckResult {
        valid: problems.is_empty(),
        problems,
    }
}
