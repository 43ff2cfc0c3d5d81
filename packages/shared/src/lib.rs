//! # Todo 共有ユーティリティ
//!
//! ビジネスロジックを含まない、サービス横断のユーティリティを提供する。
//!
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`observability`] - トレーシング初期化とリクエスト ID（`observability` feature）

pub mod health;
pub mod observability;

pub use health::HealthResponse;
