//! 全局错误类型定义
use std::io::Error as IoError;
use std::path::PathBuf;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    // 输入源相关错误
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Failed to read file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    // 输出相关错误
    #[error("Failed to write file {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("Failed to export stats: {0}")]
    StatsExport(#[from] SerdeJsonError),

    // 日志初始化错误
    #[error("Failed to initialize activity log: {0}")]
    LogInit(String),

    // 基础错误
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
}

impl CleanerError {
    /// 是否为输入源缺失（顶层按原文输出，其余错误统一包装为 Unexpected error）
    pub fn is_source_missing(&self) -> bool {
        matches!(self, CleanerError::SourceNotFound(_))
    }
}

// 全局Result类型
pub type CleanerResult<T> = Result<T, CleanerError>;
