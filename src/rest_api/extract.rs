//! Request extractors
//!
//! Wrap axum's `Json` and `Query` so that every shape failure becomes a
//! [`RestError::Validation`] (422) before a handler runs.

use axum::extract::{FromRequest, FromRequestParts};

use super::errors::RestError;

/// JSON body that rejects with a 422 validation error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(RestError))]
pub struct ValidJson<T>(pub T);

/// Query string that rejects with a 422 validation error
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(RestError))]
pub struct ValidQuery<T>(pub T);
