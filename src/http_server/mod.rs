//! # HTTP Server Module
//!
//! Axum server hosting the student API.
//!
//! # Endpoints
//!
//! - `/health` - Liveness
//! - `/health/store` - Store reachability
//! - `/students/` - Create and list students
//! - `/students/{id}` - Read, update and delete one student

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
