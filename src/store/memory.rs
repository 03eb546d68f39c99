//! # In-Memory Student Store
//!
//! A process-local store with the same observable semantics as the MongoDB
//! adapter, including a zero modified count when a replacement body equals
//! the stored record. Records are kept in identifier order, which is also
//! creation order.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{Student, StudentFilter};

use super::errors::{StoreError, StoreResult};
use super::id::StudentId;
use super::{StudentRecord, StudentStore};

/// In-memory student collection
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    records: RwLock<BTreeMap<StudentId, Student>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn insert(&self, student: Student) -> StoreResult<StudentId> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let id = StudentId::generate();
        records.insert(id, student);
        Ok(id)
    }

    async fn find_many(&self, filter: &StudentFilter) -> StoreResult<Vec<StudentRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records
            .iter()
            .filter(|(_, student)| filter.matches(student))
            .map(|(id, student)| StudentRecord {
                id: *id,
                student: student.clone(),
            })
            .collect())
    }

    async fn find_one(&self, id: StudentId) -> StoreResult<Option<Student>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn replace_one(&self, id: StudentId, student: Student) -> StoreResult<u64> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        match records.get_mut(&id) {
            Some(existing) if *existing != student => {
                *existing = student;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete_one(&self, id: StudentId) -> StoreResult<u64> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}
