//! # TaskHub API ライブラリ
//!
//! API サーバーのハンドラ・ユースケース・アプリケーション構築を公開する。
//! 結合テストはこのクレート経由でルーターをインプロセスに組み立てる。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - DI とルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ユースケース層

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
