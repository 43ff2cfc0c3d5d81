//! # リポジトリ実装
//!
//! タスクの永続化を抽象化するトレイトと、その PostgreSQL 実装を提供する。
//!
//! ハンドラはトレイトにのみ依存するため、テストではインメモリ実装
//! （`mock::MockTaskRepository`）に差し替えられる。

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
