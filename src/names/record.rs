//! # 重命名记录
//!
//! `RenameLog` 按应用顺序保存 `(sanitized, original)` 对：
//! - `apply` 按顺序把树从原名变为转义名
//! - `apply_reverse` 逆序、交换两侧，把树恢复为原名
//!
//! 父目录的记录总在其子目录之前，逆序恢复时子目录先于父目录，
//! 因此每条记录中的路径在恢复时都是有效的。
//!
//! ## 依赖关系
//! - 被 `names/sanitizer.rs`, `names/restorer.rs` 使用
//! - 使用 `names/tree.rs` 的 `DirTree`

use crate::error::{JxlBatchError, Result};
use crate::names::tree::DirTree;

use std::path::{Path, PathBuf};

/// 一次目录重命名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// 重命名后的路径
    pub sanitized: PathBuf,
    /// 重命名前的路径
    pub original: PathBuf,
}

impl RenameRecord {
    pub fn new(sanitized: impl Into<PathBuf>, original: impl Into<PathBuf>) -> Self {
        RenameRecord {
            sanitized: sanitized.into(),
            original: original.into(),
        }
    }

    /// 将两侧路径从 `from_root` 平移到 `to_root` 下
    pub fn rebase(&self, from_root: &Path, to_root: &Path) -> Result<RenameRecord> {
        Ok(RenameRecord {
            sanitized: rebase_path(&self.sanitized, from_root, to_root)?,
            original: rebase_path(&self.original, from_root, to_root)?,
        })
    }

    /// 撤销这次重命名
    ///
    /// 转义路径不存在时返回 `Ok(false)`，由调用方决定是否视为错误。
    pub fn revert<T: DirTree>(&self, tree: &mut T) -> Result<bool> {
        if !tree.exists(&self.sanitized) {
            return Ok(false);
        }
        tree.rename(&self.sanitized, &self.original)?;
        Ok(true)
    }
}

fn rebase_path(path: &Path, from_root: &Path, to_root: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(from_root)
        .map_err(|_| JxlBatchError::OutsideRoot {
            path: path.display().to_string(),
            root: from_root.display().to_string(),
        })?;
    Ok(to_root.join(relative))
}

/// 有序的重命名记录列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameLog {
    records: Vec<RenameRecord>,
}

impl RenameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RenameRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    /// 按顺序应用全部重命名，遇错即停
    ///
    /// 失败时返回 `PartialRename`，其中 `applied` 为已成功的条数，
    /// 对应 `records()[..applied]`。
    pub fn apply<T: DirTree>(&self, tree: &mut T) -> Result<()> {
        for (applied, record) in self.records.iter().enumerate() {
            if let Err(e) = tree.rename(&record.original, &record.sanitized) {
                return Err(JxlBatchError::PartialRename {
                    applied,
                    planned: self.records.len(),
                    source: Box::new(e),
                });
            }
            tracing::debug!(
                from = %record.original.display(),
                to = %record.sanitized.display(),
                "renamed directory"
            );
        }
        Ok(())
    }

    /// 逆序撤销全部重命名，单条失败不影响其余记录
    pub fn apply_reverse<T: DirTree>(&self, tree: &mut T) -> Vec<(&RenameRecord, Result<bool>)> {
        self.records
            .iter()
            .rev()
            .map(|record| (record, record.revert(tree)))
            .collect()
    }

    /// 将所有记录平移到另一棵结构相同的树
    pub fn rebase(&self, from_root: &Path, to_root: &Path) -> Result<RenameLog> {
        let records = self
            .records
            .iter()
            .map(|r| r.rebase(from_root, to_root))
            .collect::<Result<Vec<_>>>()?;
        Ok(RenameLog { records })
    }
}

impl<'a> IntoIterator for &'a RenameLog {
    type Item = &'a RenameRecord;
    type IntoIter = std::slice::Iter<'a, RenameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
