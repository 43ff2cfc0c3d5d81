//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 ステートメント**: 各メソッドは自動コミットの SQL を 1 本だけ実行する
//! - **順序は保証しない**: 一覧取得に ORDER BY を付けない
//! - **存在しない ID への削除・完了は成功扱い**: 影響行数を確認しない

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::task::{NewTask, Task, TaskId};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// 実装ごとに異なるのは保存先のみで、振る舞いは同一であること。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクを取得する（順序は不定）
    async fn get_all(&self) -> Result<Vec<Task>, InfraError>;

    /// ID でタスクを検索する
    ///
    /// 見つからない場合は `Ok(None)` を返す。
    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError>;

    /// タスクを追加する
    ///
    /// ID はストレージが採番する。採番された ID は返さない。
    async fn add(&self, task: &NewTask) -> Result<(), InfraError>;

    /// タスクを削除する
    ///
    /// 対象が存在しなくても成功する。
    async fn delete(&self, id: TaskId) -> Result<(), InfraError>;

    /// タスクを完了にする
    ///
    /// 対象が存在しなくても成功する。
    async fn mark_done(&self, id: TaskId) -> Result<(), InfraError>;

    /// 完了状態でフィルタしてタスクを取得する
    ///
    /// `done` が `None` の場合は [`get_all`](TaskRepository::get_all) と同じ結果を返す。
    async fn get_filtered(&self, done: Option<bool>) -> Result<Vec<Task>, InfraError>;
}

/// `tasks` テーブルの行
///
/// `id` は `SERIAL`（INT4）のため `i32` で受ける。
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id:    i32,
    title: String,
    done:  bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id:    TaskId::new(i64::from(row.id)),
            title: row.title,
            done:  row.done,
        }
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn get_all(&self) -> Result<Vec<Task>, InfraError> {
        let rows = sqlx::query_as::<_, TaskRow>("SELECT id, title, done FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>("SELECT id, title, done FROM tasks WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Task::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn add(&self, task: &NewTask) -> Result<(), InfraError> {
        sqlx::query("INSERT INTO tasks (title, done) VALUES ($1, $2)")
            .bind(&task.title)
            .bind(task.done)
            .execute(&self.pool)
            .await?;

        tracing::info!("タスクを追加しました");
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        tracing::info!("タスクを削除しました");
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn mark_done(&self, id: TaskId) -> Result<(), InfraError> {
        sqlx::query("UPDATE tasks SET done = TRUE WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        tracing::info!("タスクを完了にしました");
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(?done))]
    async fn get_filtered(&self, done: Option<bool>) -> Result<Vec<Task>, InfraError> {
        // $1 が NULL のときは WHERE が常に真になり、get_all と同じ結果になる
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, done
            FROM tasks
            WHERE $1::BOOLEAN IS NULL OR done = $1
            "#,
        )
        .bind(done)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}
