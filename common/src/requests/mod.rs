use crate::model::activity::Activity;
use crate::model::channel::Channel;
use crate::model::duration::DateSelection;
use crate::model::marketing_request::HEADER;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw form input for `POST /api/requests`.
///
/// Free-text fields default to empty so a missing field surfaces as a
/// validation message instead of a parse failure. `channel` and `activity`
/// are constrained by their enums at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub channel: Channel,
    pub activity: Activity,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub duration: DateSelection,
}

/// Body returned when a submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

/// Everything the form needs to render its selectors.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub channels: Vec<Channel>,
    pub activities: Vec<Activity>,
    pub default_duration: [NaiveDate; 2],
    pub columns: [&'static str; 9],
}

impl FormOptions {
    pub fn for_date(today: NaiveDate) -> Self {
        let default_duration = match DateSelection::default_for(today) {
            DateSelection::Range(start, end) => [start, end],
            DateSelection::NoSelection | DateSelection::Invalid => [today, today],
        };
        FormOptions {
            channels: Channel::ALL.to_vec(),
            activities: Activity::ALL.to_vec(),
            default_duration,
            columns: HEADER,
        }
    }
}
