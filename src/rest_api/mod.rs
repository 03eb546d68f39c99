//! # Student REST API Module
//!
//! HTTP endpoints for create, list, read, update and delete on the student
//! collection. Input shape is validated at the boundary; store outcomes are
//! mapped to status codes here.

pub mod errors;
pub mod extract;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::StudentHandler;
pub use response::{CreatedResponse, ListResponse, MessageResponse};
pub use server::RestServer;
