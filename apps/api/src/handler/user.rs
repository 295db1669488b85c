//! # ユーザーハンドラ
//!
//! User リソースの CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/users` - ユーザー一覧
//! - `POST /api/v1/users` - ユーザー作成
//! - `GET /api/v1/users/{user_id}` - ユーザー取得
//! - `PUT /api/v1/users/{user_id}` - ユーザー部分更新
//! - `DELETE /api/v1/users/{user_id}` - ユーザー削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use taskhub_domain::user::{User, UserId, UserName};

use crate::{
    error::ApiError,
    usecase::{CreateUserInput, UpdateUserInput, UserUseCaseImpl},
};

/// ユーザー API の共有状態
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// ユーザー更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
}

/// ユーザーレスポンス DTO
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id:   i64,
    pub name: String,
}

impl UserDto {
    fn from_entity(user: &User) -> Self {
        Self {
            id:   user.id().as_i64(),
            name: user.name().as_str().to_string(),
        }
    }
}

/// 削除レスポンス
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
}

// --- ハンドラ ---

/// GET /api/v1/users
///
/// ユーザー一覧を作成順で取得する。
pub async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.usecase.list_users().await?;

    let items: Vec<UserDto> = users.iter().map(UserDto::from_entity).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/v1/users
///
/// ユーザーを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む作成済みユーザー
/// - `422 Unprocessable Entity`: 名前が空・欠落、または文字数超過
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateUserInput {
        name: UserName::new(req.name)?,
    };

    let user = state.usecase.create_user(input).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from_entity(&user))))
}

/// GET /api/v1/users/{user_id}
///
/// ID を指定してユーザーを取得する。
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .usecase
        .get_user(UserId::from_i64(user_id))
        .await?
        .ok_or_else(|| ApiError::NotFound("ユーザーが見つかりません".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(&user))))
}

/// PUT /api/v1/users/{user_id}
///
/// ユーザーを部分更新する。
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateUserInput {
        name: req.name.map(UserName::new).transpose()?,
    };

    let user = state
        .usecase
        .update_user(UserId::from_i64(user_id), input)
        .await?
        .ok_or_else(|| ApiError::NotFound("ユーザーが見つかりません".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(&user))))
}

/// DELETE /api/v1/users/{user_id}
///
/// ユーザーを物理削除する。
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.usecase.delete_user(UserId::from_i64(user_id)).await?;

    if !deleted {
        return Err(ApiError::NotFound("ユーザーが見つかりません".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeleteUserResponse {
            success: true,
            message: "ユーザーを削除しました".to_string(),
        }),
    ))
}
