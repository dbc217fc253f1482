//! Task API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::state::ApiState;
use crate::error::TodoError;
use crate::model::{Task, TaskPatch};

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Task list query parameters
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub completed: Option<bool>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// Task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Update task request (all fields optional, partial update)
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Generic message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Helper functions
// ============================================================================

/// Convert Task to TaskResponse
fn task_to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
    }
}

/// Map a service error to a status code
fn error_status(e: &TodoError) -> StatusCode {
    match e {
        TodoError::EmptyTitle => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/v1/tasks
/// List tasks with optional completion filter and offset/limit
pub async fn list_tasks(
    State(state): State<ApiState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, StatusCode> {
    let tasks = state
        .service()
        .list_tasks(query.completed)
        .map_err(|e| error_status(&e))?;

    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    let tasks = tasks
        .iter()
        .skip(skip)
        .take(limit)
        .map(task_to_response)
        .collect();

    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
/// Get a single task
pub async fn get_task(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, StatusCode> {
    let task = state
        .service()
        .get_task(id)
        .map_err(|e| error_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(task_to_response(&task)))
}

/// POST /api/v1/tasks
/// Create a new task
pub async fn create_task(
    State(state): State<ApiState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), StatusCode> {
    let task = state
        .service()
        .add_task(&req.title, req.description.as_deref())
        .map_err(|e| error_status(&e))?;

    Ok((StatusCode::CREATED, Json(task_to_response(&task))))
}

/// PUT /api/v1/tasks/{id}
/// Partially update a task
pub async fn update_task(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, StatusCode> {
    let patch = TaskPatch {
        title: req.title,
        description: req.description,
        completed: req.completed,
    };

    let mut service = state.service();
    let found = service.update_task(id, patch).map_err(|e| error_status(&e))?;
    if !found {
        return Err(StatusCode::NOT_FOUND);
    }

    let task = service
        .get_task(id)
        .map_err(|e| error_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(task_to_response(&task)))
}

/// DELETE /api/v1/tasks/{id}
/// Delete a task
pub async fn delete_task(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let found = state
        .service()
        .delete_task(id)
        .map_err(|e| error_status(&e))?;
    if !found {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
