//! # MongoDB Student Store
//!
//! Adapter over a single MongoDB collection. Filters become native query
//! documents, identifiers become `_id` ObjectIds, and every call is one
//! driver round-trip. Driver errors are returned as-is.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc, Document};
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Collection};
use serde::Deserialize;

use crate::model::{Student, StudentFilter};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::id::StudentId;
use super::{StudentRecord, StudentStore};

/// Stored document shape: the record fields plus `_id`
#[derive(Debug, Deserialize)]
struct StudentDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    student: Student,
}

impl From<StudentDocument> for StudentRecord {
    fn from(doc: StudentDocument) -> Self {
        Self {
            id: StudentId::from_object_id(doc.id),
            student: doc.student,
        }
    }
}

/// MongoDB-backed student store
pub struct MongoStudentStore {
    client: Client,
    database: String,
    students: Collection<Student>,
    documents: Collection<StudentDocument>,
}

impl MongoStudentStore {
    /// Build a client from the configuration.
    ///
    /// The driver connects lazily; use [`StudentStore::ping`] to check
    /// reachability.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        if let Some(ca_file) = &config.tls_ca_file {
            options.tls = Some(Tls::Enabled(
                TlsOptions::builder().ca_file_path(ca_file.clone()).build(),
            ));
        }

        let client = Client::with_options(options)?;
        let students = client
            .database(&config.database)
            .collection::<Student>(&config.collection);
        let documents = students.clone_with_type::<StudentDocument>();

        tracing::debug!(
            database = %config.database,
            collection = %config.collection,
            tls_ca_file = ?config.tls_ca_file,
            "MongoDB client created"
        );

        Ok(Self {
            client,
            database: config.database.clone(),
            students,
            documents,
        })
    }
}

/// Translate a filter into a MongoDB query document
fn filter_document(filter: &StudentFilter) -> Document {
    let mut query = Document::new();
    if let Some(country) = &filter.country {
        query.insert("address.country", country.clone());
    }
    if let Some(min_age) = filter.min_age {
        query.insert("age", doc! { "$gte": min_age });
    }
    query
}

fn id_query(id: StudentId) -> Document {
    doc! { "_id": id.object_id() }
}

#[async_trait]
impl StudentStore for MongoStudentStore {
    async fn insert(&self, student: Student) -> StoreResult<StudentId> {
        let result = self.students.insert_one(&student, None).await?;
        result
            .inserted_id
            .as_object_id()
            .map(StudentId::from_object_id)
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn find_many(&self, filter: &StudentFilter) -> StoreResult<Vec<StudentRecord>> {
        let cursor = self.documents.find(filter_document(filter), None).await?;
        let documents: Vec<StudentDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(StudentRecord::from).collect())
    }

    async fn find_one(&self, id: StudentId) -> StoreResult<Option<Student>> {
        let found = self.documents.find_one(id_query(id), None).await?;
        Ok(found.map(|doc| doc.student))
    }

    async fn replace_one(&self, id: StudentId, student: Student) -> StoreResult<u64> {
        // $set of every field: an identical body reports zero modified
        let fields = bson::to_document(&student)?;
        let update = doc! { "$set": fields };
        let result = self.students.update_one(id_query(id), update, None).await?;
        Ok(result.modified_count)
    }

    async fn delete_one(&self, id: StudentId) -> StoreResult<u64> {
        let result = self.students.delete_one(id_query(id), None).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        tracing::debug!(database = %self.database, "MongoDB ping succeeded");
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_filter_is_empty_query() {
        assert!(filter_document(&StudentFilter::all()).is_empty());
    }

    #[test]
    fn test_filter_document_fields() {
        let query = filter_document(&StudentFilter::all().with_country("US").with_min_age(25));

        assert_eq!(query.get_str("address.country").unwrap(), "US");
        let age = query.get_document("age").unwrap();
        assert_eq!(age.get_i64("$gte").unwrap(), 25);
    }

    #[test]
    fn test_id_query_uses_object_id() {
        let id = StudentId::parse("507f1f77bcf86cd799439011").unwrap();
        let query = id_query(id);
        assert_eq!(
            query.get_object_id("_id").unwrap().to_hex(),
            "507f1f77bcf86cd799439011"
        );
    }

    #[test]
    fn test_document_shape_decodes() {
        let raw = doc! {
            "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            "name": "Alice",
            "age": 20,
            "address": { "city": "X", "country": "US" },
        };
        let decoded: StudentDocument = bson::from_document(raw).unwrap();
        let record = StudentRecord::from(decoded);
        assert_eq!(record.id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(record.student, Student::new("Alice", 20, "X", "US"));
    }

    #[test]
    fn test_int64_age_decodes() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "name": "Old",
            "age": 3_000_000_000i64,
            "address": { "city": "X", "country": "US" },
        };
        let decoded: StudentDocument = bson::from_document(raw).unwrap();
        assert_eq!(decoded.student.age, 3_000_000_000);
    }
}
