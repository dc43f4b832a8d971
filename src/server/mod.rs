pub mod error;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::core::Task;
use crate::store::TaskStore;
use error::ApiError;

/// Shared handler dependencies.
pub struct AppState<S: TaskStore> {
    pub store: Arc<S>,
}

impl<S: TaskStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    name: Option<String>,
    description: Option<String>,
}

/// The `/api` router backing the wire contract:
///
/// | Method | Path              | Success                  | Failure            |
/// |--------|-------------------|--------------------------|--------------------|
/// | GET    | `/api/todos`      | 200 array of tasks       | 500 store error    |
/// | POST   | `/api/todos`      | 201 created task         | 400 empty name     |
/// | DELETE | `/api/todos/{id}` | 200 `{"success": true}`  | 404 unknown id     |
pub fn router<S>(state: AppState<S>) -> Router
where
    S: TaskStore + Send + Sync + 'static,
{
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/api/todos/{id}", delete(delete_todo::<S>))
        .with_state(state)
}

/// Serve the API until the process is stopped.
pub async fn serve<S>(listener: TcpListener, state: AppState<S>) -> std::io::Result<()>
where
    S: TaskStore + Send + Sync + 'static,
{
    axum::serve(listener, router(state)).await
}

async fn list_todos<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    Ok(Json(state.store.list()?))
}

async fn create_todo<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    let name = body.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return Err(ApiError::validation("Todo name is required"));
    }
    let description = body.description.as_deref().unwrap_or("").trim();

    let task = state.store.put(None, name, description)?;
    log::debug!("Created todo #{}: {}", task.id, task.name);
    Ok((StatusCode::CREATED, Json(task)))
}

async fn delete_todo<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    if state.store.remove(id)? {
        log::debug!("Deleted todo #{}", id);
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::not_found("Todo not found"))
    }
}
