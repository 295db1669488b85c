//! # ユーザー
//!
//! User エンティティとそれに関連する値オブジェクトを定義する。
//!
//! Todo との関連は意図的に持たない（外部キーなし、参照整合性の強制なし）。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// ユーザー名の最大文字数
const NAME_MAX_LENGTH: usize = 100;

/// ユーザー ID（一意識別子）
///
/// ストアが採番する自動連番をラップする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    /// 既存の i64 からユーザー ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ユーザー名（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// ユーザー名を作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列（トリム後）ではない
    /// - 最大 100 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("ユーザー名は必須です".to_string()));
        }

        if value.chars().count() > NAME_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "ユーザー名は {NAME_MAX_LENGTH} 文字以内である必要があります"
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

/// User エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:   UserId,
    name: UserName,
}

impl User {
    /// データベースの行からエンティティを復元する
    pub fn from_db(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// ID を取得する
    pub fn id(&self) -> UserId {
        self.id
    }

    /// ユーザー名を取得する
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// ユーザー名を差し替えた User を返す
    pub fn with_name(self, name: UserName) -> Self {
        Self { name, ..self }
    }
}
