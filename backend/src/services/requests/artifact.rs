//! The downloadable copy handed back after a successful submission.

use crate::record_store::encoding::encode;
use common::model::marketing_request::MarketingRequest;

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Header plus the single row for `record`, built in memory with the same
/// encoding the record store uses.
pub fn serialize(record: &MarketingRequest) -> Result<Vec<u8>, csv::Error> {
    encode(record, true)
}

/// `marketing_request_<unix seconds>.csv`
pub fn file_name(unix_seconds: i64) -> String {
    format!("marketing_request_{unix_seconds}.csv")
}
