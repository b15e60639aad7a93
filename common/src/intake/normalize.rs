use crate::intake::validate::ValidatedForm;
use crate::model::marketing_request::MarketingRequest;
use chrono::{NaiveDateTime, Timelike};

impl ValidatedForm<'_> {
    /// Builds the canonical record stamped with `submitted_at`.
    ///
    /// Text fields are trimmed (email keeps its case), the phone is reduced to
    /// its digits and sub-second precision is dropped from the timestamp so
    /// the stored value round-trips through `TIMESTAMP_FORMAT`.
    pub fn normalize(self, submitted_at: NaiveDateTime) -> MarketingRequest {
        let form = self.form;
        MarketingRequest {
            timestamp: submitted_at.with_nanosecond(0).unwrap_or(submitted_at),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: self.phone,
            channel: form.channel,
            activity: form.activity,
            notes: form.notes.trim().to_string(),
            start_date: self.start,
            end_date: self.end,
        }
    }
}
