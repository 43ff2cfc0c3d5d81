//! # Todo ドメイン層
//!
//! タスク（Todo 項目）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`task`] - タスクエンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::task::{NewTask, TaskId};
//!
//! let id: TaskId = "42".parse().unwrap();
//! assert_eq!(id.as_i64(), 42);
//!
//! let new_task = NewTask::new("牛乳を買う");
//! assert!(!new_task.done);
//! ```

pub mod error;
pub mod task;

pub use error::DomainError;
