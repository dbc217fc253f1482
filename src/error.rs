//! Todos 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Todos 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（数据目录创建、终端读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// SQLite 错误
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// 标题校验失败：标题去除空白后必须非空
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// 存储错误（通用）
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Todos Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 Storage 错误
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
