//! # 目录名清理
//!
//! 先序遍历目录树，为每个需要改名的目录生成一条 `RenameRecord`，
//! 再通过 `RenameLog::apply` 依次执行。父目录的记录总排在其子孙之前，
//! 子目录记录中的路径以父目录的新名字为前缀。
//!
//! 执行失败时不回滚；`PartialRename` 的 `applied` 指出计划中已执行的前几条。
//!
//! 同一套遍历用于两个方向：
//! - `plan_escapes`：非 ASCII 名称 -> `[u<码点>]` 转义名
//! - `plan_decodes`：转义名 -> 原名（用于恢复被中断的运行）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/scan.rs`, `commands/restore.rs` 调用
//! - 使用 `names/escape.rs`, `names/record.rs`, `names/tree.rs`

use crate::error::{JxlBatchError, Result};
use crate::names::escape::{escape_name, unescape_name};
use crate::names::record::{RenameLog, RenameRecord};
use crate::names::tree::DirTree;

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

/// 规划把 `root` 下所有非 ASCII 目录名转义所需的重命名（不修改目录树）
pub fn plan_escapes<T: DirTree>(tree: &T, root: &Path) -> Result<RenameLog> {
    let mut log = RenameLog::new();
    plan_dir(tree, root, root, &escape_name, &mut log)?;
    Ok(log)
}

/// 规划把 `root` 下所有转义目录名还原所需的重命名（不修改目录树）
pub fn plan_decodes<T: DirTree>(tree: &T, root: &Path) -> Result<RenameLog> {
    let mut log = RenameLog::new();
    plan_dir(tree, root, root, &unescape_name, &mut log)?;
    Ok(log)
}

/// `current` 为目录当前的实际路径，`renamed` 为其父目录改名后它将处于的路径
fn plan_dir<T, F>(
    tree: &T,
    current: &Path,
    renamed: &Path,
    rewrite: &F,
    log: &mut RenameLog,
) -> Result<()>
where
    T: DirTree,
    F: Fn(&str) -> Cow<'_, str>,
{
    let mut claimed = HashSet::new();

    for child in tree.subdirs(current)? {
        let Some(name) = child.file_name() else {
            continue;
        };
        let name_str = name.to_string_lossy();
        let rewritten = rewrite(name_str.as_ref());
        let before = renamed.join(name);

        let after = if rewritten.as_ref() != name_str.as_ref() {
            if tree.exists(&current.join(rewritten.as_ref()))
                || !claimed.insert(rewritten.to_string())
            {
                return Err(JxlBatchError::NameCollision {
                    from: child.display().to_string(),
                    to: rewritten.to_string(),
                });
            }
            let after = renamed.join(rewritten.as_ref());
            log.push(RenameRecord::new(&after, &before));
            after
        } else {
            before
        };

        plan_dir(tree, &child, &after, rewrite, log)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::tree::{MemTree, OsTree};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sanitize_tree<T: DirTree>(tree: &mut T, root: &Path) -> Result<RenameLog> {
        let log = plan_escapes(&*tree, root)?;
        log.apply(tree)?;
        Ok(log)
    }

    #[test]
    fn test_ascii_tree_produces_no_records() {
        let mut tree = MemTree::from_paths(["in/a/b", "in/c"]);
        let before = tree.clone();

        let log = sanitize_tree(&mut tree, Path::new("in")).unwrap();
        assert!(log.is_empty());
        assert_eq!(tree, before);
    }

    #[test]
    fn test_parent_recorded_before_child_with_new_prefix() {
        let mut tree = MemTree::from_paths(["in/café/über/ascii/ñ"]);
        let log = sanitize_tree(&mut tree, Path::new("in")).unwrap();

        assert_eq!(
            log.records(),
            &[
                RenameRecord::new("in/caf[u233]", "in/café"),
                RenameRecord::new("in/caf[u233]/[u252]ber", "in/caf[u233]/über"),
                RenameRecord::new(
                    "in/caf[u233]/[u252]ber/ascii/[u241]",
                    "in/caf[u233]/[u252]ber/ascii/ñ"
                ),
            ]
        );
        assert!(tree
            .paths()
            .iter()
            .all(|p| p.to_string_lossy().is_ascii()));
    }

    #[test]
    fn test_sanitize_then_reverse_round_trip() {
        let original = MemTree::from_paths(["in/日本/東京", "in/café/x", "in/plain/ß"]);
        let mut tree = original.clone();

        let log = sanitize_tree(&mut tree, Path::new("in")).unwrap();
        assert_eq!(log.len(), 4);

        log.apply_reverse(&mut tree);
        assert_eq!(tree, original);
    }

    #[test]
    fn test_collision_with_existing_sibling_fails_fast() {
        let mut tree = MemTree::from_paths(["in/café", "in/caf[u233]"]);
        let before = tree.clone();

        let err = sanitize_tree(&mut tree, Path::new("in")).unwrap_err();
        assert!(matches!(err, JxlBatchError::NameCollision { .. }));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_decode_plan_inverts_escape() {
        let original = MemTree::from_paths(["in/café/über", "in/ok"]);
        let mut tree = original.clone();
        sanitize_tree(&mut tree, Path::new("in")).unwrap();

        let decodes = plan_decodes(&tree, Path::new("in")).unwrap();
        assert_eq!(decodes.len(), 2);
        decodes.apply(&mut tree).unwrap();
        assert_eq!(tree, original);
    }

    #[test]
    fn test_sanitize_real_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("in");
        fs::create_dir_all(root.join("café/sub")).unwrap();
        fs::write(root.join("café/a.jxl"), b"x").unwrap();

        let mut tree = OsTree;
        let log = sanitize_tree(&mut tree, &root).unwrap();

        assert_eq!(log.len(), 1);
        assert!(root.join("caf[u233]/a.jxl").is_file());
        assert!(root.join("caf[u233]/sub").is_dir());
        assert!(!root.join("café").exists());

        log.apply_reverse(&mut tree);
        let restored: PathBuf = root.join("café/a.jxl");
        assert!(restored.is_file());
    }
}
