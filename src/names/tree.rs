//! # 目录树抽象
//!
//! 重命名逻辑只需要三种操作：列出子目录、判断存在、重命名。
//! `OsTree` 作用于真实文件系统，测试中使用内存实现 `MemTree`。
//!
//! ## 依赖关系
//! - 被 `names/record.rs`, `names/sanitizer.rs`, `names/restorer.rs` 使用

use crate::error::{JxlBatchError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 可被重命名的目录树
pub trait DirTree {
    /// 列出 `dir` 的直接子目录（顺序即列举顺序）
    fn subdirs(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    fn exists(&self, path: &Path) -> bool;

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;
}

/// 真实文件系统
#[derive(Debug, Default, Clone, Copy)]
pub struct OsTree;

impl DirTree for OsTree {
    fn subdirs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| JxlBatchError::DirectoryReadError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| JxlBatchError::DirectoryReadError {
                path: dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            // 跟随符号链接
            if path.is_dir() {
                dirs.push(path);
            }
        }
        Ok(dirs)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| JxlBatchError::RenameError {
            from: from.display().to_string(),
            to: to.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
pub(crate) use mem::MemTree;


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_os_tree_lists_only_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/nested")).unwrap();
        fs::create_dir_all(tmp.path().join("b")).unwrap();
        fs::write(tmp.path().join("file.jxl"), b"x").unwrap();

        let mut dirs = OsTree.subdirs(tmp.path()).unwrap();
        dirs.sort();
        assert_eq!(dirs, vec![tmp.path().join("a"), tmp.path().join("b")]);
    }

    #[test]
    fn test_os_tree_rename_error_carries_paths() {
        let tmp = TempDir::new().unwrap();
        let err = OsTree
            .rename(&tmp.path().join("missing"), &tmp.path().join("other"))
            .unwrap_err();
        assert!(matches!(err, JxlBatchError::RenameError { .. }));
    }

    #[test]
    fn test_mem_tree_rename_moves_descendants() {
        let mut tree = MemTree::from_paths(["r/a/b/c", "r/x"]);
        tree.rename(Path::new("r/a"), Path::new("r/z")).unwrap();

        assert_eq!(
            tree.paths(),
            vec![
                PathBuf::from("r"),
                PathBuf::from("r/x"),
                PathBuf::from("r/z"),
                PathBuf::from("r/z/b"),
                PathBuf::from("r/z/b/c"),
            ]
        );
        assert!(tree.rename(Path::new("r/z"), Path::new("r/x")).is_err());
    }
}
