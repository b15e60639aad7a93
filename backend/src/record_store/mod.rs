//! Append-only persistence of accepted marketing requests.
//!
//! The submission flow only sees the [`RecordStore`] trait; `main.rs` wires in
//! a [`CsvFileStore`] and tests use the in-memory fakes from `memory`.
//! Both the store and the downloadable copy go through [`encoding::encode`],
//! which keeps the header, column order and quoting identical between them.

pub mod csv_file;
pub mod encoding;
#[cfg(test)]
pub mod memory;

pub use csv_file::CsvFileStore;

use common::model::marketing_request::MarketingRequest;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode record: {0}")]
    Encode(#[from] csv::Error),
}

/// Write-only sink for canonical records.
///
/// `append` must either persist the whole row or return an error; a record is
/// never dropped silently.
pub trait RecordStore: Send + Sync {
    fn append(&self, record: &MarketingRequest) -> Result<(), StoreError>;
}
