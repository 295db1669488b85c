//! # ユースケース層
//!
//! 1 回の呼び出しにつき 1 つのストア操作を実行する薄いサービス層。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ストア操作はユースケースに集約
//! - **検証なし**: 入力の検証は境界層（値オブジェクトの生成）で完了している
//!   前提とし、ユースケースは整形済みの入力のみ受け取る
//! - **不在シグナル**: 「見つからない」はエラーではなく `None` / `false` で
//!   表現し、境界層が 404 に変換する

pub mod todo;
pub mod user;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};
pub use user::{CreateUserInput, UpdateUserInput, UserUseCaseImpl};
