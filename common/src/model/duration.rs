use chrono::{Days, NaiveDate};
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Number of days the form's default duration spans.
pub const DEFAULT_DURATION_DAYS: u64 = 7;

/// What the duration picker on the form produced.
///
/// On the wire this is a JSON array of `YYYY-MM-DD` strings. An empty array
/// (or a missing field) means nothing was picked, exactly two parseable dates
/// form a range, and any other shape is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "DurationInput")]
pub enum DateSelection {
    #[default]
    NoSelection,
    Invalid,
    Range(NaiveDate, NaiveDate),
}

impl DateSelection {
    /// The range the form pre-fills: `today` through one week later.
    pub fn default_for(today: NaiveDate) -> Self {
        let end = today
            .checked_add_days(Days::new(DEFAULT_DURATION_DAYS))
            .unwrap_or(today);
        DateSelection::Range(today, end)
    }
}

impl From<Vec<String>> for DateSelection {
    fn from(values: Vec<String>) -> Self {
        let parsed: Option<Vec<NaiveDate>> = values
            .iter()
            .map(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
            .collect();
        match parsed.as_deref() {
            Some([]) => DateSelection::NoSelection,
            Some([start, end]) => DateSelection::Range(*start, *end),
            _ => DateSelection::Invalid,
        }
    }
}

/// Anything the client may send for `duration`; only an array of strings can
/// become a range.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationInput {
    Dates(Vec<String>),
    Other(IgnoredAny),
}

impl From<DurationInput> for DateSelection {
    fn from(input: DurationInput) -> Self {
        match input {
            DurationInput::Dates(values) => values.into(),
            DurationInput::Other(_) => DateSelection::Invalid,
        }
    }
}
