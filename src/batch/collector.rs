//! # 文件收集器
//!
//! 递归收集输入树中指定扩展名的文件。
//!
//! ## 功能
//! - 深度优先；同一目录下先列出文件，再进入子目录
//! - 同类条目保持文件系统的列举顺序（不排序）
//! - 符号链接按其指向的类型处理
//! - 结果一次性收集为 `Vec`，供后续计数和按下标分批
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{JxlBatchError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入根目录
    root: PathBuf,
    /// 扩展名（不含点）
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "jxl".to_string(),
        }
    }

    /// 设置目标扩展名
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 遍历中的任何错误都会终止收集。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!("*.{}", glob::Pattern::escape(&self.extension));
        let pattern = glob::Pattern::new(&pattern).map_err(|e| {
            JxlBatchError::InvalidArgument(format!("Invalid extension '{}': {}", self.extension, e))
        })?;

        // 稳定排序：文件 (false) 在目录 (true) 之前，其余保持原顺序
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matched = entry
                .file_name()
                .to_str()
                .map(|name| pattern.matches(name))
                .unwrap_or(false);
            if matched {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %self.root.display(), count = files.len(), "collected files");
        Ok(files)
    }
}
