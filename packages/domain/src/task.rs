//! # タスク
//!
//! Todo リストで管理する唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! ```text
//! 作成（done = false） ──MarkDone──▶ 完了（done = true）
//!        │                                 │
//!        └─────────────Delete──────────────┘
//! ```
//!
//! - `id` はストレージ（`SERIAL`）が採番し、以後変更されない
//! - `title` は作成時に設定され、以後変更されない
//! - `done` は完了操作でのみ `true` に変わる（未完了に戻す操作はない）

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// タスクの一意識別子
///
/// ストレージが採番する整数 ID。パスパラメータからの変換は
/// [`FromStr`] 経由で行い、10 進整数以外は [`DomainError::Validation`] になる。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TaskId(i64);

impl TaskId {
    /// 整数値から ID を作成する
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("Invalid task ID: {s:?}")))
    }
}

/// 永続化済みのタスク
///
/// JSON 表現: `{ "id": <integer>, "title": <string>, "done": <boolean> }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id:    TaskId,
    pub title: String,
    pub done:  bool,
}

/// 作成前のタスク
///
/// ID はストレージが採番するため持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub done:  bool,
}

impl NewTask {
    /// 未完了のタスクを作成する
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done:  false,
        }
    }
}

/// `done` フィルタ値をパースする
///
/// 受け付けるリテラルは `1` / `t` / `true` / `0` / `f` / `false`（大文字小文字を区別しない）。
/// 未指定または空文字列はフィルタなし（`None`）として扱う。
pub fn parse_done_filter(raw: Option<&str>) -> Result<Option<bool>, DomainError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(Some(true)),
        "0" | "f" | "false" => Ok(Some(false)),
        _ => Err(DomainError::Validation(format!(
            "Invalid 'done' query parameter: {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("9223372036854775807", i64::MAX)]
    fn test_task_idは10進整数をパースできる(#[case] input: &str, #[case] expected: i64) {
        let id: TaskId = input.parse().unwrap();
        assert_eq!(id.as_i64(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("0x10")]
    #[case(" 1")]
    #[case("9223372036854775808")]
    fn test_task_idは整数以外を拒否する(#[case] input: &str) {
        let result = input.parse::<TaskId>();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_task_idのdisplayは整数値を出力する() {
        assert_eq!(TaskId::new(12).to_string(), "12");
    }

    #[test]
    fn test_taskのserializeで正しいjson形状にする() {
        let task = Task {
            id:    TaskId::new(3),
            title: "buy milk".to_string(),
            done:  false,
        };

        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "title": "buy milk", "done": false })
        );
    }

    #[test]
    fn test_new_taskは未完了で作成される() {
        let new_task = NewTask::new("buy milk");
        assert_eq!(new_task.title, "buy milk");
        assert!(!new_task.done);
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("True", true)]
    #[case("t", true)]
    #[case("1", true)]
    #[case("false", false)]
    #[case("FALSE", false)]
    #[case("f", false)]
    #[case("0", false)]
    fn test_parse_done_filterは真偽値リテラルを受け付ける(
        #[case] input: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(parse_done_filter(Some(input)), Ok(Some(expected)));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn test_parse_done_filterは未指定をフィルタなしとして扱う(#[case] input: Option<&str>) {
        assert_eq!(parse_done_filter(input), Ok(None));
    }

    #[rstest]
    #[case("maybe")]
    #[case("yes")]
    #[case("2")]
    #[case("tru")]
    fn test_parse_done_filterは不正な値を拒否する(#[case] input: &str) {
        assert!(matches!(
            parse_done_filter(Some(input)),
            Err(DomainError::Validation(_))
        ));
    }
}
