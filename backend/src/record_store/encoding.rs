use common::model::marketing_request::{MarketingRequest, HEADER};
use csv::{Terminator, WriterBuilder};

/// Encodes `record` as one CSV row, optionally preceded by the header row.
///
/// Comma delimited, CRLF terminated; a field is quoted only when it holds a
/// comma, quote or line break, and embedded quotes are doubled.
pub fn encode(record: &MarketingRequest, with_header: bool) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    if with_header {
        writer.write_record(HEADER)?;
    }
    writer.serialize(record)?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
