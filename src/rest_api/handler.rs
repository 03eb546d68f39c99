//! # Student Request Handler
//!
//! Maps each student operation onto exactly one store call and turns store
//! outcomes into REST results. Bodies arrive already typed; identifiers
//! arrive as raw path strings and are decoded here. A decoding failure
//! converts into [`RestError::InvalidId`].

use std::sync::Arc;

use crate::model::{Student, StudentFilter};
use crate::store::{StudentId, StudentRecord, StudentStore};

use super::errors::{RestError, RestResult};

/// Handles student operations against an injected store
#[derive(Clone)]
pub struct StudentHandler {
    store: Arc<dyn StudentStore>,
}

impl StudentHandler {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Insert a record and return its identifier
    pub async fn create(&self, student: Student) -> RestResult<StudentId> {
        let id = self.store.insert(student).await?;
        tracing::debug!(%id, "Student created");
        Ok(id)
    }

    /// Return every record matching the filter
    pub async fn list(&self, filter: StudentFilter) -> RestResult<Vec<StudentRecord>> {
        let filter = filter.normalized();
        let records = self.store.find_many(&filter).await?;
        tracing::debug!(
            country = ?filter.country,
            min_age = ?filter.min_age,
            count = records.len(),
            "Students listed"
        );
        Ok(records)
    }

    /// Fetch a single record
    pub async fn read(&self, id: &str) -> RestResult<Student> {
        let id = StudentId::parse(id)?;
        self.store.find_one(id).await?.ok_or(RestError::NotFound)
    }

    /// Replace every field of an existing record.
    ///
    /// A zero modified count is reported as not found, including when the
    /// stored record already equals `student`.
    pub async fn update(&self, id: &str, student: Student) -> RestResult<()> {
        let id = StudentId::parse(id)?;
        match self.store.replace_one(id, student).await? {
            0 => Err(RestError::NotFound),
            _ => {
                tracing::debug!(%id, "Student updated");
                Ok(())
            }
        }
    }

    /// Remove a record
    pub async fn delete(&self, id: &str) -> RestResult<()> {
        let id = StudentId::parse(id)?;
        match self.store.delete_one(id).await? {
            0 => Err(RestError::NotFound),
            _ => {
                tracing::debug!(%id, "Student deleted");
                Ok(())
            }
        }
    }
}
