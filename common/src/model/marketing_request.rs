use crate::model::activity::Activity;
use crate::model::channel::Channel;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Column order of the record store and of the downloadable copy.
///
/// Must stay in sync with the field order of [`MarketingRequest`], which is
/// what the CSV serializer walks when writing a row.
pub const HEADER: [&str; 9] = [
    "timestamp",
    "name",
    "email",
    "phone",
    "channel",
    "activity",
    "notes",
    "start_date",
    "end_date",
];

/// Format of the `timestamp` column, e.g. `2024-01-01 09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A normalized marketing request, ready to be stored.
///
/// Built by `intake::ValidatedForm::normalize`, so every instance has a
/// digits-only phone of at least seven digits, a shape-checked email and
/// `start_date <= end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingRequest {
    /// Local submission time, truncated to whole seconds.
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub channel: Channel,
    pub activity: Activity,
    pub notes: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarketingRequest {
        MarketingRequest {
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            name: "Jane Doe".to_string(),
            email: "jane@store.com".to_string(),
            phone: "14165550123".to_string(),
            channel: Channel::Retail,
            activity: Activity::Seo,
            notes: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        }
    }

    #[test]
    fn serializes_every_header_column() {
        let value = serde_json::to_value(sample()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        let mut expected = HEADER.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn timestamp_uses_fixed_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["timestamp"], "2024-01-01 09:30:00");
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["channel"], "retail");
        assert_eq!(value["activity"], "SEO");
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: MarketingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
