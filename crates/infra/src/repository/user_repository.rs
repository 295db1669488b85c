//! # UserRepository
//!
//! ユーザー情報の永続化を担当するリポジトリ。
//! 操作の形は [`TodoRepository`](crate::repository::TodoRepository) と対称で、
//! 完了フィルタとトグルを持たない。

use async_trait::async_trait;
use sqlx::SqlitePool;
use taskhub_domain::user::{User, UserId, UserName};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザー一覧を主キー順で取得する
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索する
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーを挿入し、採番された ID を含むエンティティを返す
    async fn insert(&self, name: &UserName) -> Result<User, InfraError>;

    /// ユーザーを上書き保存する
    async fn update(&self, user: &User) -> Result<(), InfraError>;

    /// ユーザーを削除する
    ///
    /// 行が存在し削除された場合は `true` を返す。
    async fn delete(&self, id: UserId) -> Result<bool, InfraError>;
}

/// users テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id:   i64,
    name: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, InfraError> {
        let name = UserName::new(self.name).map_err(|e| InfraError::Unexpected(e.to_string()))?;
        Ok(User::from_db(UserId::from_i64(self.id), name))
    }
}

/// SQLite 実装の UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, name: &UserName) -> Result<User, InfraError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn update(&self, user: &User) -> Result<(), InfraError> {
        sqlx::query("UPDATE users SET name = ?1 WHERE id = ?2")
            .bind(user.name().as_str())
            .bind(user.id().as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
