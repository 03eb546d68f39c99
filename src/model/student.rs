//! Student record types
//!
//! Every field is required. A body that is missing a field or carries a
//! field of the wrong type never deserializes into a [`Student`], so no
//! partial record can reach a store.

use serde::{Deserialize, Serialize};

/// Postal address embedded in a student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// A student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl Student {
    /// Create a new student record
    pub fn new(
        name: impl Into<String>,
        age: i64,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            address: Address {
                city: city.into(),
                country: country.into(),
            },
        }
    }
}
