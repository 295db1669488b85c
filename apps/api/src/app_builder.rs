//! # アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! 結合テストはこの関数でルーターを組み立て、インプロセスで
//! リクエストを投げる。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};
use sqlx::SqlitePool;
use taskhub_infra::repository::{
    SqliteTodoRepository,
    SqliteUserRepository,
    TodoRepository,
    UserRepository,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handler::{
        TodoState,
        UserState,
        create_todo,
        create_user,
        delete_todo,
        delete_user,
        get_todo,
        get_user,
        health_check,
        list_todos,
        list_users,
        service_info,
        toggle_todo,
        update_todo,
        update_user,
    },
    usecase::{TodoUseCaseImpl, UserUseCaseImpl},
};

/// DI コンテナの構築とルーター定義を行う
///
/// リポジトリ → ユースケース → State → Router の順に組み立てる。
/// State はリソース種別ごとに分割し、各ハンドラは必要な依存のみ受け取る。
pub fn build_app(pool: SqlitePool) -> Router {
    // Todo 関連の依存コンポーネント
    let todo_repository: Arc<dyn TodoRepository> =
        Arc::new(SqliteTodoRepository::new(pool.clone()));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });

    // ユーザー関連の依存コンポーネント
    let user_repository: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));
    let user_state = Arc::new(UserState {
        usecase: UserUseCaseImpl::new(user_repository),
    });

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        // Todo API
        .route("/api/v1/todos", get(list_todos).post(create_todo))
        .route(
            "/api/v1/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/v1/todos/{todo_id}/toggle", patch(toggle_todo))
        .with_state(todo_state)
        // ユーザー API
        .route("/api/v1/users", get(list_users).post(create_user))
        .route(
            "/api/v1/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(user_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
