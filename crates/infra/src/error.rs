//! # インフラ層エラー定義
//!
//! ストアとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: sqlx::Error をラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **未分類伝播**: ストア障害は API 層で 500 に変換されるまで
//!   特別扱いしない（リトライなし、部分失敗なし）

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// データベースクエリの実行で発生するエラーの種別。
/// API 層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラー、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// 予期しないエラー
    ///
    /// ストアから取得した行がドメインの不変条件を満たさない場合など。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}
