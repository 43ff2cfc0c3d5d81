//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリの [`TaskRepository`] 実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::task::{NewTask, Task, TaskId};

use crate::{error::InfraError, repository::TaskRepository};

#[derive(Debug)]
struct MockState {
    next_id: i64,
    tasks:   Vec<Task>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            next_id: 1,
            tasks:   Vec::new(),
        }
    }
}

/// インメモリのタスクリポジトリ
///
/// ID は 1 から順に採番する。一覧は追加順で返す。
/// `Clone` したインスタンス同士は同じデータを共有する。
#[derive(Debug, Clone, Default)]
pub struct MockTaskRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 採番済みのタスクを直接投入する（テストの前提データ用）
    pub fn seed(&self, title: &str, done: bool) -> TaskId {
        let mut state = self.state.lock().unwrap();
        let id = TaskId::new(state.next_id);
        state.next_id += 1;
        state.tasks.push(Task {
            id,
            title: title.to_string(),
            done,
        });
        id
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn get_all(&self) -> Result<Vec<Task>, InfraError> {
        Ok(self.state.lock().unwrap().tasks.clone())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn add(&self, task: &NewTask) -> Result<(), InfraError> {
        self.seed(&task.title, task.done);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
        self.state.lock().unwrap().tasks.retain(|t| t.id != id);
        Ok(())
    }

    async fn mark_done(&self, id: TaskId) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
            task.done = true;
        }
        Ok(())
    }

    async fn get_filtered(&self, done: Option<bool>) -> Result<Vec<Task>, InfraError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tasks
            .iter()
            .filter(|t| done.is_none_or(|d| t.done == d))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_addでidが1から採番される() {
        let sut = MockTaskRepository::new();

        sut.add(&NewTask::new("first")).await.unwrap();
        sut.add(&NewTask::new("second")).await.unwrap();

        let ids: Vec<i64> = sut
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|t| t.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_削除したidは再利用されない() {
        let sut = MockTaskRepository::new();
        let id = sut.seed("first", false);

        sut.delete(id).await.unwrap();
        let next = sut.seed("second", false);

        assert_eq!(next.as_i64(), 2);
    }

    #[tokio::test]
    async fn test_存在しないidへのmark_doneとdeleteは何もしない() {
        let sut = MockTaskRepository::new();
        sut.seed("keep", false);

        sut.mark_done(TaskId::new(99)).await.unwrap();
        sut.delete(TaskId::new(99)).await.unwrap();

        let tasks = sut.get_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].done);
    }

    #[tokio::test]
    async fn test_get_filteredはdoneの値で絞り込む() {
        let sut = MockTaskRepository::new();
        sut.seed("open", false);
        sut.seed("closed", true);

        let done = sut.get_filtered(Some(true)).await.unwrap();
        let open = sut.get_filtered(Some(false)).await.unwrap();
        let all = sut.get_filtered(None).await.unwrap();

        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "closed");
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "open");
        assert_eq!(all, sut.get_all().await.unwrap());
    }

    #[tokio::test]
    async fn test_cloneしたインスタンスはデータを共有する() {
        let sut = MockTaskRepository::new();
        let cloned = sut.clone();

        cloned.add(&NewTask::new("shared")).await.unwrap();

        assert_eq!(sut.get_all().await.unwrap().len(), 1);
    }
}
