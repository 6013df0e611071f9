//! Single-document JSON store.
//!
//! The whole record collection lives in one JSON object file: top-level
//! keys are record ids, values are the raw stored fields. Every mutation
//! rewrites the full document. There is no indexing and no cross-process
//! locking; in-process callers serialize access through [`crate::Registry`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backing document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backing document is not a JSON object")]
    NotAnObject,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The full record collection, id to raw stored fields.
pub type RecordMap = BTreeMap<String, Value>;

/// Store over a single JSON object document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document if none exists yet, so a fresh deployment
    /// can serve requests.
    pub fn create_if_missing(&self) -> StoreResult<()> {
        if !self.path.exists() {
            self.save(&RecordMap::new())?;
        }
        Ok(())
    }

    /// Read the full document.
    ///
    /// Values come back as raw JSON; no per-record schema validation
    /// happens here. Individual records are only validated when they are
    /// materialized as a [`crate::models::Patient`].
    pub fn load(&self) -> StoreResult<RecordMap> {
        let bytes = fs::read(&self.path)?;
        match serde_json::from_slice(&bytes)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(StoreError::NotAnObject),
        }
    }

    /// Overwrite the document with the full map.
    ///
    /// Content goes to a sibling temp file first and is renamed into
    /// place, so a crash mid-write cannot truncate the live document.
    pub fn save(&self, records: &RecordMap) -> StoreResult<()> {
        let tmp = self.path.with_extension("tmp");
        let file = fs::File::create(&tmp)?;
        serde_json::to_writer(&file, records)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
