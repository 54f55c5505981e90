//! CSV import of an externally exported task snapshot into task records the
//! scoring pipeline can consume.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::analytics::performance::domain::TaskRecord;

#[derive(Debug)]
pub enum SnapshotImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SnapshotImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotImportError::Io(err) => write!(f, "failed to read task snapshot: {}", err),
            SnapshotImportError::Csv(err) => write!(f, "invalid task snapshot data: {}", err),
        }
    }
}

impl std::error::Error for SnapshotImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotImportError::Io(err) => Some(err),
            SnapshotImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SnapshotImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct TaskSnapshotImporter;

impl TaskSnapshotImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TaskRecord>, SnapshotImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TaskRecord>, SnapshotImportError> {
        parser::parse_records(reader).map_err(Into::into)
    }
}
