//! Student identifiers
//!
//! Identifiers are 12-byte ObjectIds assigned by the store and rendered as
//! 24-character hex strings. Encoding and decoding stay in this module so the
//! REST layer never handles the native representation.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};

use super::errors::{StoreError, StoreResult};

/// Store-assigned student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(ObjectId);

impl StudentId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Decode an identifier from its hex form.
    ///
    /// Fails with [`StoreError::InvalidId`] on wrong length or charset.
    pub fn parse(s: &str) -> StoreResult<Self> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(s.to_string()))
    }

    /// Hex rendering
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub(crate) fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    pub(crate) fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for StudentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
