//! # Todo API 設定
//!
//! 環境変数から Todo API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `DATABASE_URL` | **Yes** | - | PostgreSQL 接続 URL |
//! | `TODO_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `TODO_API_PORT` | No | `8080` | ポート番号 |
//! | `DB_MAX_CONNECTIONS` | No | `10` | 接続プールの最大接続数 |
//!
//! 設定は起動時に一度だけ構築し、参照で各コンポーネントに渡す。
//! グローバル変数からは読まない。

use std::env;

use thiserror::Error;
use todo_infra::db::DatabaseConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Todo API サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoApiConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// データベース接続設定
    pub database: DatabaseConfig,
}

impl TodoApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう、参照元を差し替え可能にしている。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host:     lookup("TODO_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port:     parse_or("TODO_API_PORT", lookup("TODO_API_PORT"), DEFAULT_PORT)?,
            database: DatabaseConfig {
                url,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    lookup("DB_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
    }
}
