//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、永続化はリポジトリに委譲する

pub mod health;
pub mod task;

pub use health::health_check;
pub use task::{
    TaskState,
    create_task,
    delete_task,
    delete_task_at_filter,
    get_task,
    list_filtered_tasks,
    list_tasks,
    mark_task_done,
};
