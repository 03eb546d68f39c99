//! # Student REST Routes
//!
//! Axum routes for the `/students` collection. Each route accepts the path
//! with or without a trailing slash.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::model::{Student, StudentFilter};
use crate::store::{StudentRecord, StudentStore};

use super::errors::RestResult;
use super::extract::{ValidJson, ValidQuery};
use super::handler::StudentHandler;
use super::response::{CreatedResponse, ListResponse, MessageResponse};

/// REST API server state
pub struct RestServer {
    handler: StudentHandler,
}

impl RestServer {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self {
            handler: StudentHandler::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/students", post(create_handler).get(list_handler))
            .route("/students/", post(create_handler).get(list_handler))
            .route(
                "/students/:id",
                get(read_handler).patch(update_handler).delete(delete_handler),
            )
            .with_state(state)
    }
}

/// Shared state type
type ServerState = Arc<RestServer>;

/// Create student handler
async fn create_handler(
    State(server): State<ServerState>,
    ValidJson(student): ValidJson<Student>,
) -> RestResult<Json<CreatedResponse>> {
    let id = server.handler.create(student).await?;
    Ok(Json(CreatedResponse::new(id.to_hex())))
}

/// List students handler
async fn list_handler(
    State(server): State<ServerState>,
    ValidQuery(filter): ValidQuery<StudentFilter>,
) -> RestResult<Json<ListResponse<StudentRecord>>> {
    let records = server.handler.list(filter).await?;
    Ok(Json(ListResponse::new(records)))
}

/// Read student handler
async fn read_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Json<Student>> {
    let student = server.handler.read(&id).await?;
    Ok(Json(student))
}

/// Update student handler
async fn update_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(student): ValidJson<Student>,
) -> RestResult<Json<MessageResponse>> {
    server.handler.update(&id, student).await?;
    Ok(Json(MessageResponse::updated()))
}

/// Delete student handler
async fn delete_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Json<MessageResponse>> {
    server.handler.delete(&id).await?;
    Ok(Json(MessageResponse::deleted()))
}
