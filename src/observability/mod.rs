//! Observability for the student service
//!
//! Logging goes through `tracing`; HTTP requests are traced by
//! `tower_http::trace::TraceLayer` in the server.

mod logger;

pub use logger::{init_logging, LogConfig, LoggingError};
