//! # 统一错误处理模块
//!
//! 定义 jxlbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的转换失败不是错误（见 `models::ConversionStatus`），
//! 恢复阶段的失败也只记录不传播；这里只包含致命错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// jxlbatch 统一错误类型
#[derive(Error, Debug)]
pub enum JxlBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to rename '{from}' -> '{to}'")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 扫描与命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to walk directory tree")]
    WalkError(#[from] walkdir::Error),

    #[error("Escaped name '{to}' already exists, refusing to rename '{from}'")]
    NameCollision { from: String, to: String },

    #[error("Renaming stopped after {applied} of {planned} directories")]
    PartialRename {
        applied: usize,
        planned: usize,
        #[source]
        source: Box<JxlBatchError>,
    },

    #[error("Path '{path}' is not under root '{root}'")]
    OutsideRoot { path: String, root: String },

    // ─────────────────────────────────────────────────────────────
    // 并行执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, JxlBatchError>;
