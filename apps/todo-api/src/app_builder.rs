//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! リポジトリの型をジェネリクスで受け取るため、テストでは
//! インメモリ実装を渡して DB なしでルーター全体を検証できる。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};
use todo_infra::repository::TaskRepository;
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    TaskState,
    create_task,
    delete_task,
    delete_task_at_filter,
    get_task,
    health_check,
    list_filtered_tasks,
    list_tasks,
    mark_task_done,
};

/// ルーターを構築する
///
/// `/tasks/filter` は静的セグメントのため `/tasks/{id}` より優先される。
/// DELETE は `filter` を ID として扱うハンドラに回す。
pub fn build_app<R>(repository: R) -> Router
where
    R: TaskRepository + 'static,
{
    let task_state = Arc::new(TaskState { repository });

    Router::new()
        .route("/health", get(health_check))
        .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/tasks/filter",
            get(list_filtered_tasks::<R>).delete(delete_task_at_filter::<R>),
        )
        .route("/tasks/{id}", get(get_task::<R>).delete(delete_task::<R>))
        .route("/tasks/{id}/done", patch(mark_task_done::<R>))
        .with_state(task_state)
        // 下に書いたものが外側:
        // SetRequestId → Trace（スパンに request_id を記録）→ PropagateRequestId
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
