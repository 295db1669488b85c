//! # ルートハンドラ
//!
//! サービスメタデータを返すエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "message": "Welcome to TaskHub API",
//!   "version": "0.1.0",
//!   "endpoints": {
//!     "todos": "/api/v1/todos",
//!     "users": "/api/v1/users"
//!   }
//! }
//! ```

use axum::Json;
use serde::Serialize;

/// サービスメタデータレスポンス
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub message:   String,
    pub version:   String,
    pub endpoints: EndpointMap,
}

/// 公開エンドポイントのパス一覧
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub todos: String,
    pub users: String,
}

/// サービスメタデータエンドポイント
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message:   "Welcome to TaskHub API".to_string(),
        version:   env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            todos: "/api/v1/todos".to_string(),
            users: "/api/v1/users".to_string(),
        },
    })
}
