use crate::record_store::{RecordStore, StoreError};
use common::model::marketing_request::MarketingRequest;
use std::io;
use std::sync::{Mutex, PoisonError};

/// Keeps appended records in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<MarketingRequest>>,
}

impl MemoryStore {
    pub fn records(&self) -> Vec<MarketingRequest> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &MarketingRequest) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

/// Rejects every append, like a read-only disk.
#[derive(Debug, Default)]
pub struct FailingStore;

impl RecordStore for FailingStore {
    fn append(&self, _record: &MarketingRequest) -> Result<(), StoreError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system").into())
    }
}
