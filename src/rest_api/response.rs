//! # Response Formatting
//!
//! Response bodies for the student endpoints.

use serde::Serialize;

/// Response to a successful create
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// List response. Always the full result set.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Confirmation message for update and delete
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated() -> Self {
        Self {
            message: "Student updated successfully".to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            message: "Student deleted successfully".to_string(),
        }
    }
}
