use crate::ops::validate::{default_logo_path, parse_date};

use super::fixture::Match;

/// The seven text fields of the add/edit form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    HomeTeam,
    AwayTeam,
    StreamSource,
    FixtureDate,
    FixtureTime,
    HomeLogo,
    AwayLogo,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::HomeTeam,
        FormField::AwayTeam,
        FormField::StreamSource,
        FormField::FixtureDate,
        FormField::FixtureTime,
        FormField::HomeLogo,
        FormField::AwayLogo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::HomeTeam => "Home Team",
            FormField::AwayTeam => "Away Team",
            FormField::StreamSource => "Stream Source",
            FormField::FixtureDate => "Date (ddmmyyyy)",
            FormField::FixtureTime => "Time (HH:MM)",
            FormField::HomeLogo => "Home Logo",
            FormField::AwayLogo => "Away Logo",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Validation failure when turning a form into a [`Match`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid date \"{value}\": please enter the date in ddmmyyyy format (e.g., 20102025)")]
    InvalidDate { value: String },
}

/// Current values of the add/edit form.
///
/// Logo fields follow their team name as it is typed, until the user edits
/// the logo by hand. The `*_touched` flags record that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchForm {
    pub home_team: String,
    pub away_team: String,
    pub stream_source: String,
    pub fixture_date: String,
    pub fixture_time: String,
    pub home_logo: String,
    pub away_logo: String,
    pub home_logo_touched: bool,
    pub away_logo_touched: bool,
}

impl MatchForm {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing match. A logo that differs from the derived
    /// default is treated as hand-edited so that renaming a team keeps it.
    pub fn from_match(m: &Match) -> Self {
        MatchForm {
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            stream_source: m.stream_source.clone(),
            fixture_date: m.fixture_date.clone(),
            fixture_time: m.fixture_time.clone(),
            home_logo: m.home_logo.clone(),
            away_logo: m.away_logo.clone(),
            home_logo_touched: is_custom_logo(&m.home_logo, &m.home_team),
            away_logo_touched: is_custom_logo(&m.away_logo, &m.away_team),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::HomeTeam => &self.home_team,
            FormField::AwayTeam => &self.away_team,
            FormField::StreamSource => &self.stream_source,
            FormField::FixtureDate => &self.fixture_date,
            FormField::FixtureTime => &self.fixture_time,
            FormField::HomeLogo => &self.home_logo,
            FormField::AwayLogo => &self.away_logo,
        }
    }

    /// Replace a field's text, applying the live logo update.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::HomeTeam => {
                self.home_team = value;
                if !self.home_logo_touched {
                    self.home_logo = auto_logo(&self.home_team);
                }
            }
            FormField::AwayTeam => {
                self.away_team = value;
                if !self.away_logo_touched {
                    self.away_logo = auto_logo(&self.away_team);
                }
            }
            FormField::StreamSource => self.stream_source = value,
            FormField::FixtureDate => self.fixture_date = value,
            FormField::FixtureTime => self.fixture_time = value,
            FormField::HomeLogo => {
                // Clearing the logo hands it back to the auto-update
                self.home_logo_touched = !value.trim().is_empty();
                self.home_logo = value;
            }
            FormField::AwayLogo => {
                self.away_logo_touched = !value.trim().is_empty();
                self.away_logo = value;
            }
        }
    }

    /// Trim every field, validate the date and fill blank logos.
    pub fn validate(&self) -> Result<Match, FormError> {
        let home_team = self.home_team.trim().to_string();
        let away_team = self.away_team.trim().to_string();
        let raw_date = self.fixture_date.trim();
        let fixture_date = parse_date(raw_date).ok_or_else(|| FormError::InvalidDate {
            value: raw_date.to_string(),
        })?;

        let home_logo = match self.home_logo.trim() {
            "" => default_logo_path(&home_team),
            logo => logo.to_string(),
        };
        let away_logo = match self.away_logo.trim() {
            "" => default_logo_path(&away_team),
            logo => logo.to_string(),
        };

        Ok(Match {
            home_team,
            away_team,
            stream_source: self.stream_source.trim().to_string(),
            fixture_date,
            fixture_time: self.fixture_time.trim().to_string(),
            home_logo,
            away_logo,
        })
    }
}

fn auto_logo(team: &str) -> String {
    if team.trim().is_empty() {
        String::new()
    } else {
        default_logo_path(team)
    }
}

fn is_custom_logo(logo: &str, team: &str) -> bool {
    !logo.is_empty() && logo != default_logo_path(team)
}
