//! registrar - student record service over a MongoDB collection
//!
//! Layers, outermost first:
//! - `cli`: configuration and process lifecycle
//! - `http_server`: Axum server, tracing and CORS
//! - `rest_api`: student endpoints and error mapping
//! - `store`: record store adapters (MongoDB, in-memory)
//! - `model`: student record and filter types

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod store;
