use serde::{Deserialize, Deserializer, Serialize};

/// A single scheduled game.
///
/// Records have no id: a match is identified by its position in the list,
/// and insertion order is display order. Every key is optional on read and a
/// `null` reads as "", so one hand-edited record cannot make the whole file
/// unreadable. `mb check` reports what such a record is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    #[serde(deserialize_with = "null_as_empty")]
    pub home_team: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub away_team: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub stream_source: String,
    /// `ddmmyyyy`, always 8 digits once validated
    #[serde(deserialize_with = "null_as_empty")]
    pub fixture_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub fixture_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub home_logo: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub away_logo: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Match {
    /// "Home vs Away", used in confirmations and status messages
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
