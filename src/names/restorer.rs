//! # 目录名恢复
//!
//! 转换结束后，逆序撤销清理阶段的重命名：先输入树，再把同一批记录
//! 平移到输出根目录下撤销输出树中的对应目录。
//!
//! 每条记录独立处理，失败只记录不中断。输出树中缺少对应目录是正常
//! 情况（该子树没有产生任何输出文件），记为跳过而非失败。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `names/record.rs`, `names/tree.rs`

use crate::error::JxlBatchError;
use crate::names::record::RenameLog;
use crate::names::tree::DirTree;

use std::path::{Path, PathBuf};

/// 单条恢复失败
#[derive(Debug)]
pub struct RestoreFailure {
    /// 未能恢复的转义路径
    pub path: PathBuf,
    pub error: JxlBatchError,
}

/// 恢复阶段统计
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// 成功恢复的目录数（两棵树合计）
    pub restored: usize,
    /// 输出树中不存在、无需恢复的目录
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<RestoreFailure>,
}

impl RestoreReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 恢复输入树和输出树中的原始目录名
pub fn restore_trees<T: DirTree>(
    tree: &mut T,
    log: &RenameLog,
    input_root: &Path,
    output_root: &Path,
) -> RestoreReport {
    let mut report = RestoreReport::default();

    for (record, outcome) in log.apply_reverse(tree) {
        match outcome {
            Ok(true) => report.restored += 1,
            Ok(false) => report.failures.push(RestoreFailure {
                path: record.sanitized.clone(),
                error: JxlBatchError::DirectoryNotFound {
                    path: record.sanitized.display().to_string(),
                },
            }),
            Err(error) => report.failures.push(RestoreFailure {
                path: record.sanitized.clone(),
                error,
            }),
        }
    }

    let mirrored = match log.rebase(input_root, output_root) {
        Ok(mirrored) => mirrored,
        Err(error) => {
            report.failures.push(RestoreFailure {
                path: output_root.to_path_buf(),
                error,
            });
            return report;
        }
    };

    for (record, outcome) in mirrored.apply_reverse(tree) {
        match outcome {
            Ok(true) => report.restored += 1,
            Ok(false) => report.skipped.push(record.sanitized.clone()),
            Err(error) => report.failures.push(RestoreFailure {
                path: record.sanitized.clone(),
                error,
            }),
        }
    }

    for failure in &report.failures {
        tracing::warn!(path = %failure.path.display(), error = %failure.error, "restore failed");
    }

    report
}
