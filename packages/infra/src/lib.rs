//! # Todo インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理と `tasks` テーブルの準備
//! - **リポジトリ実装**: [`repository::TaskRepository`] の具体実装
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は HTTP の概念（ステータスコードなど）を一切扱わない。
//! エラーは [`InfraError`] として返し、HTTP への変換は API 層が行う。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール作成とスキーマ準備
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::PostgresTaskRepository};
//!
//! let pool = db::create_pool(&config.database).await?;
//! db::ensure_schema(&pool).await?;
//! let repository = PostgresTaskRepository::new(pool);
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
