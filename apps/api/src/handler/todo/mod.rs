//! # Todo ハンドラ
//!
//! Todo リソースの CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/todos` - Todo 一覧（`?completed=` でフィルタ）
//! - `POST /api/v1/todos` - Todo 作成
//! - `GET /api/v1/todos/{todo_id}` - Todo 取得
//! - `PUT /api/v1/todos/{todo_id}` - Todo 部分更新
//! - `DELETE /api/v1/todos/{todo_id}` - Todo 削除
//! - `PATCH /api/v1/todos/{todo_id}/toggle` - 完了フラグ反転

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize};
use taskhub_domain::todo::{Todo, TodoDescription, TodoId, TodoTitle};

use crate::{
    error::ApiError,
    usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};


/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 一覧のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    /// 完了状態フィルタ（省略時は全件）
    pub completed: Option<bool>,
}

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title:       String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed:   bool,
}

/// Todo 更新リクエスト
///
/// すべてのフィールドが省略可能な部分更新。
/// `description` のみ「省略」と「明示的な null」を区別する必要があるため
/// 二重 `Option` でデシリアライズする。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title:       Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub completed:   Option<bool>,
}

/// フィールド省略と明示的な null を区別するデシリアライザ
///
/// - フィールド省略: `None`（`#[serde(default)]` による）
/// - `"description": null`: `Some(None)`
/// - `"description": "値"`: `Some(Some(値))`
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Todo レスポンス DTO
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id:          i64,
    pub title:       String,
    pub description: Option<String>,
    pub completed:   bool,
}

impl TodoDto {
    fn from_entity(todo: &Todo) -> Self {
        Self {
            id:          todo.id().as_i64(),
            title:       todo.title().as_str().to_string(),
            description: todo.description().map(|d| d.as_str().to_string()),
            completed:   todo.completed(),
        }
    }
}

/// 削除レスポンス
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub success: bool,
    pub message: String,
}

// --- ハンドラ ---

/// GET /api/v1/todos
///
/// Todo 一覧を作成順で取得する。
/// `?completed=true|false` で完了状態によるフィルタが可能。
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
    Query(query): Query<ListTodosQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.usecase.list_todos(query.completed).await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from_entity).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/v1/todos
///
/// Todo を作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む作成済み Todo
/// - `422 Unprocessable Entity`: タイトルが空・欠落、または文字数超過
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateTodoInput {
        title:       TodoTitle::new(req.title)?,
        description: req.description.map(TodoDescription::new).transpose()?,
        completed:   req.completed,
    };

    let todo = state.usecase.create_todo(input).await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from_entity(&todo))))
}

/// GET /api/v1/todos/{todo_id}
///
/// ID を指定して Todo を取得する。
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .usecase
        .get_todo(TodoId::from_i64(todo_id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo が見つかりません".to_string()))?;

    Ok((StatusCode::OK, Json(TodoDto::from_entity(&todo))))
}

/// PUT /api/v1/todos/{todo_id}
///
/// Todo を部分更新する。リクエストで指定されたフィールドのみ上書きし、
/// 省略されたフィールドは変更しない。
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(todo_id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateTodoInput {
        title:       req.title.map(TodoTitle::new).transpose()?,
        description: req
            .description
            .map(|d| d.map(TodoDescription::new).transpose())
            .transpose()?,
        completed:   req.completed,
    };

    let todo = state
        .usecase
        .update_todo(TodoId::from_i64(todo_id), input)
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo が見つかりません".to_string()))?;

    Ok((StatusCode::OK, Json(TodoDto::from_entity(&todo))))
}

/// DELETE /api/v1/todos/{todo_id}
///
/// Todo を物理削除する（ソフトデリートなし）。
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.usecase.delete_todo(TodoId::from_i64(todo_id)).await?;

    if !deleted {
        return Err(ApiError::NotFound("Todo が見つかりません".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeleteTodoResponse {
            success: true,
            message: "Todo を削除しました".to_string(),
        }),
    ))
}

/// PATCH /api/v1/todos/{todo_id}/toggle
///
/// 完了フラグを反転する（true ↔ false）。
pub async fn toggle_todo(
    State(state): State<Arc<TodoState>>,
    Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .usecase
        .toggle_completed(TodoId::from_i64(todo_id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo が見つかりません".to_string()))?;

    Ok((StatusCode::OK, Json(TodoDto::from_entity(&todo))))
}
