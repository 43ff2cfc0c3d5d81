//! # タスク API ハンドラ
//!
//! `/tasks` 配下のエンドポイントを実装する。
//! 各ハンドラはパラメータを解釈し、リポジトリ操作を 1 回だけ呼び出す。
//!
//! | Method | Path | 成功時 |
//! |--------|------|--------|
//! | GET | /tasks | 200 + JSON 配列 |
//! | GET | /tasks/{id} | 200 + JSON オブジェクト |
//! | GET | /tasks/filter?done={bool} | 200 + JSON 配列 |
//! | POST | /tasks | 201（ボディなし） |
//! | DELETE | /tasks/{id} | 204（ボディなし） |
//! | DELETE | /tasks/filter | 400（`filter` は ID として不正） |
//! | PATCH | /tasks/{id}/done | 200（ボディなし） |

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use todo_domain::task::{NewTask, Task, TaskId, parse_done_filter};
use todo_infra::repository::TaskRepository;

use crate::error::TodoApiError;

/// タスクハンドラーの State
pub struct TaskState<R> {
    pub repository: R,
}

/// タスク作成リクエスト
///
/// `id` は受け付けるが使用しない（ストレージが採番する）。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, rename = "id")]
    _id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub done:  bool,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            done:  req.done,
        }
    }
}

/// フィルタ用クエリパラメータ
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub done: Option<String>,
}

/// 全タスクを取得する
///
/// ## エンドポイント
/// GET /tasks
pub async fn list_tasks<R>(
    State(state): State<Arc<TaskState<R>>>,
) -> Result<Json<Vec<Task>>, TodoApiError>
where
    R: TaskRepository,
{
    let tasks = state.repository.get_all().await?;
    Ok(Json(tasks))
}

/// ID でタスクを取得する
///
/// ## エンドポイント
/// GET /tasks/{id}
pub async fn get_task<R>(
    State(state): State<Arc<TaskState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TodoApiError>
where
    R: TaskRepository,
{
    let id: TaskId = id.parse()?;

    let task = state
        .repository
        .get_by_id(id)
        .await?
        .ok_or(TodoApiError::NotFound)?;

    Ok(Json(task))
}

/// 完了状態でフィルタしたタスクを取得する
///
/// `done` が未指定の場合は全件を返す。
///
/// ## エンドポイント
/// GET /tasks/filter?done={bool}
pub async fn list_filtered_tasks<R>(
    State(state): State<Arc<TaskState<R>>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<Task>>, TodoApiError>
where
    R: TaskRepository,
{
    let done = parse_done_filter(query.done.as_deref())?;

    let tasks = state.repository.get_filtered(done).await?;
    Ok(Json(tasks))
}

/// タスクを作成する
///
/// Content-Type に関わらずボディを JSON として解釈する。
/// 採番された ID は返さない。
///
/// ## エンドポイント
/// POST /tasks
pub async fn create_task<R>(
    State(state): State<Arc<TaskState<R>>>,
    body: Bytes,
) -> Result<StatusCode, TodoApiError>
where
    R: TaskRepository,
{
    let req = decode_create_request(&body)?;

    state.repository.add(&req.into()).await?;

    Ok(StatusCode::CREATED)
}

/// ボディ先頭の JSON 値を作成リクエストとして解釈する
///
/// 先頭の値の後ろに続くデータは読まない。
fn decode_create_request(body: &[u8]) -> Result<CreateTaskRequest, TodoApiError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<CreateTaskRequest>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("empty body")))
        .map_err(|e| {
            tracing::debug!(error = %e, "タスク作成リクエストの解析に失敗しました");
            TodoApiError::Validation("Invalid input".to_string())
        })
}

/// タスクを削除する
///
/// 存在しない ID でも 204 を返す。
///
/// ## エンドポイント
/// DELETE /tasks/{id}
pub async fn delete_task<R>(
    State(state): State<Arc<TaskState<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoApiError>
where
    R: TaskRepository,
{
    delete_by_raw_id(&state, &id).await
}

/// `/tasks/filter` への DELETE
///
/// 静的ルート `/tasks/filter` は `/tasks/{id}` より優先されるため、
/// `filter` を ID として扱い `DELETE /tasks/{id}` と同じ応答（400）を返す。
///
/// ## エンドポイント
/// DELETE /tasks/filter
pub async fn delete_task_at_filter<R>(
    State(state): State<Arc<TaskState<R>>>,
) -> Result<StatusCode, TodoApiError>
where
    R: TaskRepository,
{
    delete_by_raw_id(&state, FILTER_SEGMENT).await
}

const FILTER_SEGMENT: &str = "filter";

async fn delete_by_raw_id<R>(
    state: &TaskState<R>,
    raw_id: &str,
) -> Result<StatusCode, TodoApiError>
where
    R: TaskRepository,
{
    let id: TaskId = raw_id.parse()?;

    state.repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// タスクを完了にする
///
/// 存在しない ID でも 200 を返す。
///
/// ## エンドポイント
/// PATCH /tasks/{id}/done
pub async fn mark_task_done<R>(
    State(state): State<Arc<TaskState<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoApiError>
where
    R: TaskRepository,
{
    let id: TaskId = id.parse()?;

    state.repository.mark_done(id).await?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_task_requestはidを無視しdoneを既定でfalseにする() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"id": 99, "title": "buy milk"}"#).unwrap();

        let new_task = NewTask::from(req);

        assert_eq!(new_task, NewTask::new("buy milk"));
    }

    #[test]
    fn test_create_task_requestはdoneを受け付ける() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "already", "done": true}"#).unwrap();

        assert!(NewTask::from(req).done);
    }

    #[test]
    fn test_create_task_requestはtitleが必須() {
        let result = serde_json::from_str::<CreateTaskRequest>(r#"{"done": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_create_requestは先頭のjson値だけを読む() {
        let req = decode_create_request(br#"{"title": "first"}{"title": "second"}"#).unwrap();

        assert_eq!(NewTask::from(req), NewTask::new("first"));
    }

    #[test]
    fn test_decode_create_requestは空のボディを拒否する() {
        let result = decode_create_request(b"  ");

        assert!(matches!(result, Err(TodoApiError::Validation(msg)) if msg == "Invalid input"));
    }

    #[test]
    fn test_create_task_requestは型の合わないidを拒否する() {
        let result = serde_json::from_str::<CreateTaskRequest>(r#"{"id": "x", "title": "t"}"#);
        assert!(result.is_err());
    }
}
