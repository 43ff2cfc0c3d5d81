//! # Todo API
//!
//! タスク（Todo 項目）を管理する HTTP API のライブラリ部分。
//! バイナリ（`main.rs`）とテストの双方から利用する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
