use crate::record_store::encoding::encode;
use crate::record_store::{RecordStore, StoreError};
use common::model::marketing_request::MarketingRequest;
use log::{debug, error};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// CSV file on disk, opened in append mode for every record.
///
/// The header row is written when the file is empty. A process-wide mutex
/// serializes appends, and each row (plus header, on first write) goes out in
/// a single `write_all` followed by `sync_data`. A write that fails partway is
/// cut back off the file, so the store never keeps half a row.
#[derive(Debug)]
pub struct CsvFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvFileStore {
    fn append(&self, record: &MarketingRequest) -> Result<(), StoreError> {
        // the mutex guards no data, only the ordering of writes
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let prev_len = file.current_len()?;
        let is_new = prev_len == 0;
        if is_new {
            debug!("creating record store at {}", self.path.display());
        }

        let bytes = encode(record, is_new)?;
        write_or_rollback(&mut file, prev_len, &bytes)?;
        Ok(())
    }
}

/// Append destination that can be cut back to an earlier length.
trait AppendTarget: Write {
    fn current_len(&self) -> io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl AppendTarget for File {
    fn current_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Writes and syncs all of `bytes`, or restores `target` to `prev_len` and
/// returns the write error.
fn write_or_rollback<T: AppendTarget>(target: &mut T, prev_len: u64, bytes: &[u8]) -> io::Result<()> {
    let written = target.write_all(bytes).and_then(|()| target.sync());
    if let Err(err) = written {
        if let Err(rollback) = target.truncate_to(prev_len) {
            error!("could not roll back partial record store write: {rollback}");
        }
        return Err(err);
    }
    Ok(())
}
