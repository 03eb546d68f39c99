//! # Record Store Adapter
//!
//! Translates between the student vocabulary ([`Student`], [`StudentFilter`],
//! [`StudentId`]) and the document database. Each trait method maps to
//! exactly one database call.
//!
//! - [`MongoStudentStore`]: MongoDB collection via the official driver
//! - [`InMemoryStudentStore`]: process-local map with the same semantics

pub mod config;
pub mod errors;
pub mod id;
pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{Student, StudentFilter};

pub use config::{StoreBackend, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use id::StudentId;
pub use memory::InMemoryStudentStore;
pub use mongo::MongoStudentStore;

/// A persisted student together with its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: StudentId,
    #[serde(flatten)]
    pub student: Student,
}

/// Record store operations over the student collection
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a record and return its newly assigned identifier
    async fn insert(&self, student: Student) -> StoreResult<StudentId>;

    /// Return every record matching the filter
    async fn find_many(&self, filter: &StudentFilter) -> StoreResult<Vec<StudentRecord>>;

    /// Look up a single record
    async fn find_one(&self, id: StudentId) -> StoreResult<Option<Student>>;

    /// Overwrite every field of the addressed record.
    ///
    /// Returns the number of records actually changed: zero when the id is
    /// unknown and also when the stored record already equals `student`.
    async fn replace_one(&self, id: StudentId, student: Student) -> StoreResult<u64>;

    /// Remove the addressed record and return the number removed
    async fn delete_one(&self, id: StudentId) -> StoreResult<u64>;

    /// Round-trip to the backing database
    async fn ping(&self) -> StoreResult<()>;

    /// Release the connection. Called once at shutdown.
    async fn close(&self);
}

/// Open the store selected by the configuration
pub async fn open(config: &StoreConfig) -> StoreResult<Arc<dyn StudentStore>> {
    match config.backend {
        StoreBackend::Mongo => {
            let store = MongoStudentStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryStudentStore::new())),
    }
}
