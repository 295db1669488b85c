//! # API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError) ──┐
//! インフラ層エラー (InfraError) ──┤→ API エラー (ApiError)
//!                                  │       ↓ IntoResponse
//!                                  │  HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```
//!
//! ## ステータスコードの対応
//!
//! | バリアント | HTTP ステータス |
//! |-----------|----------------|
//! | `Validation` | 422 Unprocessable Entity |
//! | `NotFound` | 404 Not Found |
//! | `Database` | 500 Internal Server Error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use taskhub_domain::DomainError;
use taskhub_infra::InfraError;
use taskhub_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力値の検証失敗
    ///
    /// 境界層で値オブジェクトの生成に失敗した場合。
    /// ストアへのアクセス前に検出される。
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// リソースが見つからない
    ///
    /// ユースケース層の不在シグナル（`None` / `false`）を
    /// ハンドラがこのバリアントに変換する。
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation_error(e.to_string()),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone())),
            ApiError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
