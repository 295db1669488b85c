//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 422 Unprocessable Entity | 入力値の検証失敗 |
//!
//! 「エンティティが見つからない」はエラーではなく、ユースケース層が
//! `Option` / `bool` の不在シグナルとして表現する（境界層が 404 に変換する）。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの生成時に検出される検証エラーを表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
