use axum::Json;
use axum::extract::{Path, State};

use crate::core::name::{Greeting, NameEntry};
use crate::core::reply::MessageReply;
use crate::core::todo::{NewTodo, PrioUpdate, Todo};
use crate::store::StoreError;

use super::ServerState;
use super::error::ApiError;

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn list_todos(State(state): State<ServerState>) -> ApiResult<Vec<Todo>> {
    let todos = state.todos.list().await.map_err(ApiError::during("list todos"))?;
    Ok(Json(todos))
}

/// A body that is missing or not JSON is treated as an empty draft, so it is
/// rejected by validation like any other incomplete submission.
pub async fn create_todo(
    State(state): State<ServerState>,
    body: Option<Json<NewTodo>>,
) -> ApiResult<MessageReply> {
    let draft = body.map(|Json(draft)| draft).unwrap_or_default();
    let message = state
        .todos
        .create(draft)
        .await
        .map_err(ApiError::during("create todo"))?;
    Ok(Json(MessageReply { message }))
}

pub async fn toggle_checked(
    Path(id): Path<String>,
    State(state): State<ServerState>,
) -> ApiResult<Vec<Todo>> {
    let touched = state
        .todos
        .update_checked(&id)
        .await
        .map_err(ApiError::during("toggle checked"))?;
    Ok(Json(touched))
}

pub async fn update_priority(
    Path(id): Path<String>,
    State(state): State<ServerState>,
    body: Option<Json<PrioUpdate>>,
) -> ApiResult<Vec<Todo>> {
    let prio = body
        .and_then(|Json(update)| update.prio)
        .ok_or_else(|| StoreError::validation("No priority set"))
        .map_err(ApiError::during("update priority"))?;
    let touched = state
        .todos
        .update_priority(&id, &prio)
        .await
        .map_err(ApiError::during("update priority"))?;
    Ok(Json(touched))
}

pub async fn delete_todo(
    Path(id): Path<String>,
    State(state): State<ServerState>,
) -> ApiResult<Vec<Todo>> {
    let remaining = state
        .todos
        .delete(&id)
        .await
        .map_err(ApiError::during("delete todo"))?;
    Ok(Json(remaining))
}

pub async fn list_names(State(state): State<ServerState>) -> ApiResult<Vec<NameEntry>> {
    let names = state.names.list().await.map_err(ApiError::during("list names"))?;
    Ok(Json(names))
}

/// Serves both `GET` (no body) and `POST` with an optional `{lastName}`.
pub async fn greet(
    Path(name): Path<String>,
    State(state): State<ServerState>,
    body: Option<Json<Greeting>>,
) -> ApiResult<MessageReply> {
    let greeting = body.map(|Json(g)| g).unwrap_or_default();
    let message = state
        .names
        .greet(&name, greeting.last_name.as_deref())
        .await
        .map_err(ApiError::during("greet"))?;
    Ok(Json(MessageReply { message }))
}

pub async fn delete_name(
    Path(id): Path<String>,
    State(state): State<ServerState>,
) -> ApiResult<Vec<NameEntry>> {
    let remaining = state
        .names
        .delete(&id)
        .await
        .map_err(ApiError::during("delete name"))?;
    Ok(Json(remaining))
}
