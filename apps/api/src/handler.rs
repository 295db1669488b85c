//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、入力検証（値オブジェクトの生成）とレスポンスへの
//!   変換のみを担当。ストア操作はユースケース層に委譲
//! - ユースケースの不在シグナル（`None` / `false`）をここで 404 に変換

pub mod health;
pub mod root;
pub mod todo;
pub mod user;

pub use health::health_check;
pub use root::service_info;
pub use todo::{
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    list_todos,
    toggle_todo,
    update_todo,
};
pub use user::{UserState, create_user, delete_user, get_user, list_users, update_user};
