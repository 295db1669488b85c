//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成とマイグレーションの適用を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 毎回接続を張り直すオーバーヘッドを避け、接続を再利用。
//!   各リクエストはプールから接続を借り、処理完了時に無条件で返却する
//!   （成功・失敗を問わずスコープ終了で解放される）
//! - **sqlx 採用**: 非同期サポート、埋め込みマイグレーション
//! - **SQLite 専用**: 単一ファイル / インメモリで完結し、外部サーバー不要
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskhub_infra::db;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let pool = db::create_pool("sqlite://todos.db").await?;
//!
//!     // クエリ実行（接続はプールから自動取得・返却）
//!     let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
//!         .fetch_one(&pool)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。データベースファイルが存在しない
/// 場合は作成する。
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL（形式: `sqlite://path/to/file.db`）
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// テスト用のインメモリ接続プールを作成する
///
/// インメモリ SQLite は接続ごとに独立したデータベースになるため、
/// `max_connections(1)` で単一接続に固定し、アイドルタイムアウトを
/// 無効化して接続（= データベース）が破棄されないようにする。
pub async fn create_in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされるため、
/// プロセス起動時に毎回呼び出してもテーブル作成は冪等になる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
