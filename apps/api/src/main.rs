//! # TaskHub API サーバー
//!
//! Todo / User リソースの CRUD API を提供する HTTP サーバー。
//!
//! ## 役割
//!
//! - **境界層**: リクエストの検証とレスポンスのシリアライズ
//! - **ユースケース層**: 1 呼び出し 1 クエリの薄いサービス
//! - **ストア**: SQLite への永続化（起動時にテーブルを冪等に作成）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://todos.db`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`、デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p taskhub-api
//!
//! # 本番環境
//! API_PORT=8000 DATABASE_URL=sqlite:///var/lib/taskhub/todos.db \
//!     LOG_FORMAT=json cargo run -p taskhub-api --release
//! ```

use std::net::SocketAddr;

use taskhub_api::{app_builder::build_app, config::ApiConfig};
use taskhub_infra::db;
use taskhub_shared::observability::{LogFormat, TracingConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("taskhub-api");
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,taskhub=debug".into()),
    );
    match tracing_config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    // 設定読み込み
    let config = ApiConfig::from_env();

    tracing::info!(
        "TaskHub API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    // テーブルを冪等に作成（適用済みマイグレーションはスキップされる）
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗しました");

    // ルーター構築
    let app = build_app(pool);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("TaskHub API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
