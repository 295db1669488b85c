//! # Todo
//!
//! Todo エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | 用語 | 制約 |
//! |---|------|------|
//! | [`Todo`] | タスク | 永続化された Todo は必ず非空のタイトルを持つ |
//! | [`TodoTitle`] | タイトル | 1〜200 文字 |
//! | [`TodoDescription`] | 説明 | 1000 文字以内（省略可） |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID は i64 をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、変更は `with_*` メソッド経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//!
//! ## 状態遷移
//!
//! `completed` フラグの 2 値のみ: {未完了, 完了}。
//! [`Todo::toggled`] が反転し、更新で明示的に設定することもできる。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// タイトルの最大文字数
const TITLE_MAX_LENGTH: usize = 200;

/// 説明の最大文字数
const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Todo ID（一意識別子）
///
/// ストアが採番する自動連番をラップする。
/// Newtype パターンで User ID との取り違えを防ぐ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の i64 から Todo ID を作成する
    ///
    /// ID はストアが採番するため、`new()` に相当するコンストラクタは持たない。
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Todo タイトル（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// タイトルを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列（トリム後）ではない
    /// - 最大 200 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("タイトルは必須です".to_string()));
        }

        if value.chars().count() > TITLE_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "タイトルは {TITLE_MAX_LENGTH} 文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Todo 説明（値オブジェクト）
///
/// タイトルと異なり空文字列を許容する（省略との区別はエンティティ側の
/// `Option<TodoDescription>` が担う）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// 説明を作成する
    ///
    /// # バリデーション
    ///
    /// - 最大 1000 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "説明は {DESCRIPTION_MAX_LENGTH} 文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Todo エンティティ
///
/// 永続化された 1 件のタスクを表す。正本はストアが保持し、
/// このオブジェクトは 1 リクエストのセッションスコープ内でのみ生存する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: Option<TodoDescription>,
    completed:   bool,
}

impl Todo {
    /// データベースの行からエンティティを復元する
    pub fn from_db(
        id: TodoId,
        title: TodoTitle,
        description: Option<TodoDescription>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// ID を取得する
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// タイトルを取得する
    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// 説明を取得する
    pub fn description(&self) -> Option<&TodoDescription> {
        self.description.as_ref()
    }

    /// 完了フラグを取得する
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// タイトルを差し替えた Todo を返す
    pub fn with_title(self, title: TodoTitle) -> Self {
        Self { title, ..self }
    }

    /// 説明を差し替えた Todo を返す
    ///
    /// `None` を渡すと説明をクリアする。
    pub fn with_description(self, description: Option<TodoDescription>) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// 完了フラグを差し替えた Todo を返す
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }

    /// 完了フラグを反転した Todo を返す
    pub fn toggled(self) -> Self {
        Self {
            completed: !self.completed,
            ..self
        }
    }
}
