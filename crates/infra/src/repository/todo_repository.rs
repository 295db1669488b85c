//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 メソッド 1 クエリ**: 各操作は単一のストアクエリに対応する
//! - **不在シグナル**: 見つからない場合は `Ok(None)` / `Ok(false)` を返し、
//!   エラーにはしない（境界層が 404 に変換する）
//! - **挿入順の一覧**: 一覧は主キー順（= 挿入順）で返す

use async_trait::async_trait;
use sqlx::SqlitePool;
use taskhub_domain::todo::{Todo, TodoDescription, TodoId, TodoTitle};

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo 一覧を主キー順で取得する
    ///
    /// `completed` を指定すると完了状態が一致する行のみ返す。
    async fn find_all(&self, completed: Option<bool>) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(todo))`: 見つかった場合
    /// - `Ok(None)`: 見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番された ID を含むエンティティを返す
    async fn insert(
        &self,
        title: &TodoTitle,
        description: Option<&TodoDescription>,
        completed: bool,
    ) -> Result<Todo, InfraError>;

    /// Todo の全フィールドを上書き保存する
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を削除する
    ///
    /// 行が存在し削除された場合は `true`、存在しなかった場合は `false` を返す。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// todos テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          i64,
    title:       String,
    description: Option<String>,
    completed:   bool,
}

impl TodoRow {
    /// 行からドメインエンティティを復元する
    ///
    /// 永続化済みの行は値オブジェクトの不変条件を満たしている前提のため、
    /// 違反は `InfraError::Unexpected` として扱う。
    fn into_todo(self) -> Result<Todo, InfraError> {
        let title =
            TodoTitle::new(self.title).map_err(|e| InfraError::Unexpected(e.to_string()))?;
        let description = self
            .description
            .map(TodoDescription::new)
            .transpose()
            .map_err(|e| InfraError::Unexpected(e.to_string()))?;

        Ok(Todo::from_db(
            TodoId::from_i64(self.id),
            title,
            description,
            self.completed,
        ))
    }
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self, completed: Option<bool>) -> Result<Vec<Todo>, InfraError> {
        let rows: Vec<TodoRow> = match completed {
            Some(flag) => {
                sqlx::query_as(
                    r#"
                    SELECT id, title, description, completed
                    FROM todos
                    WHERE completed = ?1
                    ORDER BY id
                    "#,
                )
                .bind(flag)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, title, description, completed
                    FROM todos
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, completed
            FROM todos
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    async fn insert(
        &self,
        title: &TodoTitle,
        description: Option<&TodoDescription>,
        completed: bool,
    ) -> Result<Todo, InfraError> {
        let row: TodoRow = sqlx::query_as(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(title.as_str())
        .bind(description.map(TodoDescription::as_str))
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;

        row.into_todo()
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET title = ?1, description = ?2, completed = ?3
            WHERE id = ?4
            "#,
        )
        .bind(todo.title().as_str())
        .bind(todo.description().map(TodoDescription::as_str))
        .bind(todo.completed())
        .bind(todo.id().as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
