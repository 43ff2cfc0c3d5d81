//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! DB への接続は確認せず、プロセスの起動状態のみを返す。

use axum::Json;
use todo_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
