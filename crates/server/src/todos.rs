use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use service::todo::TodoText;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Creation payload. Both the body and the field are optional; whatever is
/// given (including nothing) gets appended.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub todo: Option<String>,
}

/// Deletion selector, separate from the creation payload.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteTodo {
    pub idx: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TodoAdded {
    pub todo: TodoText,
    pub user: String,
}

/// 追加一条 todo；用户首次写入时自动建立序列
pub async fn add_todo(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Option<Json<CreateTodo>>,
) -> Json<TodoAdded> {
    let text = payload.map(|Json(p)| p.todo).unwrap_or_default();
    let todo = state.todos.add(&username, text).await;
    Json(TodoAdded { todo, user: username })
}

/// 列出指定用户的全部 todo；未知用户返回空序列
pub async fn get_todos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<serde_json::Value> {
    let todos = state.todos.list(&username).await;
    Json(json!({ username: todos }))
}

/// 按下标删除一条 todo
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Option<Json<DeleteTodo>>,
) -> Result<Response, ApiError> {
    let idx = payload.map(|Json(p)| p.idx).unwrap_or_default();
    match state.todos.remove(&username, idx).await? {
        Some(deleted) => Ok(Json(json!({ "deleted": deleted })).into_response()),
        // absent or out-of-range index: succeed with an empty body, no effect
        None => Ok(().into_response()),
    }
}
