//! Patient Registry Core Library
//!
//! File-backed patient record storage with derived health metrics.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!      │
//!      ▼
//!  Registry ── one locked read-modify-write cycle per operation
//!      │
//!      ├── models   validation + BMI/verdict (the only validation site)
//!      ├── sort     stable numeric sort over raw records
//!      └── store    single JSON object document, temp-file + rename save
//! ```
//!
//! # Core Principle
//!
//! Read endpoints return records exactly as stored, raw and unvalidated;
//! every write path routes through the validated [`models::Patient`].
//!
//! # Modules
//!
//! - [`models`]: domain types (Patient, PatientUpdate, BMI verdict)
//! - [`store`]: the single-document JSON store
//! - [`sort`]: sort engine over raw stored records

pub mod models;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use models::{BmiVerdict, Gender, Patient, PatientFields, PatientUpdate, ValidationError};
pub use sort::{SortError, SortField, SortOrder};
pub use store::{JsonStore, RecordMap, StoreError};

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Registry-level errors, aggregating every layer below.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("patient '{0}' not found")]
    NotFound(String),

    #[error("patient id '{0}' already exists")]
    IdExists(String),

    #[error("stored record for '{id}' is not a valid patient: {source}")]
    MalformedRecord {
        id: String,
        source: serde_json::Error,
    },

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for RegistryError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RegistryError::LockPoisoned(e.to_string())
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Service object owning the store.
///
/// Every operation runs as one read-modify-write cycle under the mutex,
/// which closes the lost-update race between concurrent handlers in this
/// process. Cross-process exclusion is out of scope.
#[derive(Clone)]
pub struct Registry {
    store: Arc<Mutex<JsonStore>>,
}

impl Registry {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Full raw map, exactly as stored. No derived fields are added.
    pub fn list(&self) -> RegistryResult<RecordMap> {
        let store = self.store.lock()?;
        Ok(store.load()?)
    }

    /// Raw stored fields for one id.
    pub fn get(&self, id: &str) -> RegistryResult<Value> {
        let store = self.store.lock()?;
        let records = store.load()?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Records ordered by a metric field.
    pub fn sorted(&self, field: SortField, order: SortOrder) -> RegistryResult<Vec<Value>> {
        let store = self.store.lock()?;
        let records = store.load()?;
        Ok(sort::sort_records(&records, field, order))
    }

    /// Validate and persist a new patient. The id must be unused; the
    /// store is untouched on any failure.
    pub fn create(&self, patient: &Patient) -> RegistryResult<()> {
        patient.fields.validate()?;
        let store = self.store.lock()?;
        let mut records = store.load()?;
        if records.contains_key(&patient.id) {
            return Err(RegistryError::IdExists(patient.id.clone()));
        }
        records.insert(
            patient.id.clone(),
            serde_json::to_value(&patient.fields).map_err(StoreError::from)?,
        );
        store.save(&records)?;
        Ok(())
    }

    /// Merge a partial patch over the stored record, re-validate the whole
    /// merged patient, and persist the result.
    ///
    /// Validation happens on the merged record, so a patch whose fields are
    /// individually fine can still fail against the stored state, and a
    /// corrupt stored record surfaces here as [`RegistryError::MalformedRecord`].
    pub fn update(&self, id: &str, patch: &PatientUpdate) -> RegistryResult<()> {
        let store = self.store.lock()?;
        let mut records = store.load()?;
        let Some(stored) = records.get(id) else {
            return Err(RegistryError::NotFound(id.to_string()));
        };

        // Merge at the raw-JSON level: only keys present in the patch
        // overwrite stored keys.
        let mut merged = stored.clone();
        let patch_value = serde_json::to_value(patch).map_err(StoreError::from)?;
        if let (Value::Object(target), Value::Object(source)) = (&mut merged, patch_value) {
            for (key, value) in source {
                target.insert(key, value);
            }
        }

        let fields: PatientFields =
            serde_json::from_value(merged).map_err(|source| RegistryError::MalformedRecord {
                id: id.to_string(),
                source,
            })?;
        fields.validate()?;

        records.insert(
            id.to_string(),
            serde_json::to_value(&fields).map_err(StoreError::from)?,
        );
        store.save(&records)?;
        Ok(())
    }
}
