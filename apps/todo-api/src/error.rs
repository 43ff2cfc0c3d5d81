//! # Todo API エラー定義
//!
//! ハンドラが返すエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError (Validation)  ─┐
//!                            ├─▶ TodoApiError ──IntoResponse──▶ StatusCode + プレーンテキスト
//! InfraError                ─┘
//! ```
//!
//! | TodoApiError | HTTP Status |
//! |--------------|-------------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Database | 500 |
//!
//! エラーボディは JSON ではなくプレーンテキストで返す。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum TodoApiError {
    /// 不正なパスパラメータ・クエリ・リクエストボディ
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// タスクが見つからない
    #[error("タスクが見つかりません")]
    NotFound,

    /// 永続化層のエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for TodoApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for TodoApiError {
    fn into_response(self) -> Response {
        match self {
            TodoApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            TodoApiError::NotFound => (StatusCode::NOT_FOUND, "Task not found").into_response(),
            TodoApiError::Database(e) => {
                // 原因はログにのみ出力し、クライアントには返さない
                tracing::error!(error = ?e, "データベースエラー: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_validationは400とプレーンテキストを返す() {
        let response = TodoApiError::Validation("Invalid task ID".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Invalid task ID");
    }

    #[tokio::test]
    async fn test_not_foundは404を返す() {
        let response = TodoApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Task not found");
    }

    #[tokio::test]
    async fn test_databaseは原因を隠して500を返す() {
        let response =
            TodoApiError::from(InfraError::unexpected("password authentication failed"))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert_eq!(body, "Internal Server Error");
        assert!(!body.contains("password"));
    }

    #[test]
    fn test_domain_errorのvalidationはvalidationに変換される() {
        let err = TodoApiError::from(DomainError::Validation("bad".to_string()));
        assert!(matches!(err, TodoApiError::Validation(msg) if msg == "bad"));
    }
}
