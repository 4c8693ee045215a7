//! # restore 命令实现
//!
//! convert 在转义之后、恢复之前被中断时，目录树会停留在转义名状态。
//! 本命令按转义规则解码目录名并重命名回去，不依赖原运行的记录。
//!
//! ## 依赖关系
//! - 使用 `cli/restore.rs` 定义的参数
//! - 使用 `names/sanitizer.rs` 的 `plan_decodes`
//! - 使用 `utils/output.rs`

use crate::cli::restore::RestoreArgs;
use crate::error::{JxlBatchError, Result};
use crate::names::{plan_decodes, OsTree};
use crate::utils::output;

/// 执行 restore 命令
pub fn execute(args: RestoreArgs) -> Result<()> {
    output::print_header("Restoring Escaped Directory Names");

    let mut tree = OsTree;
    let mut restored = 0;

    for root in &args.roots {
        if !root.is_dir() {
            return Err(JxlBatchError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }

        // 解码计划中 `sanitized` 一侧是还原后的名字
        let plan = plan_decodes(&tree, root)?;
        if plan.is_empty() {
            output::print_skip(&format!("{}: nothing to restore", root.display()));
            continue;
        }

        output::print_info(&format!(
            "{}: {} director(ies) (restored <- escaped):",
            root.display(),
            plan.len()
        ));
        for record in &plan {
            output::print_rename(&record.sanitized, &record.original);
        }

        if args.dry_run {
            continue;
        }

        plan.apply(&mut tree)?;
        output::print_success(&format!("Restored {} director(ies)", plan.len()));
        restored += plan.len();
    }

    if args.dry_run {
        output::print_done("Dry run, nothing renamed");
    } else {
        output::print_done(&format!("Restored {} director(ies) in total", restored));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_restores_every_root() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir_all(input.join("caf[u233]/[u252]ber")).unwrap();
        fs::create_dir_all(output.join("caf[u233]")).unwrap();

        execute(RestoreArgs {
            roots: vec![input.clone(), output.clone()],
            dry_run: false,
        })
        .unwrap();

        assert!(input.join("café/über").is_dir());
        assert!(output.join("café").is_dir());
        assert!(!input.join("caf[u233]").exists());
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("caf[u233]")).unwrap();

        execute(RestoreArgs {
            roots: vec![tmp.path().to_path_buf()],
            dry_run: true,
        })
        .unwrap();

        assert!(tmp.path().join("caf[u233]").is_dir());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = execute(RestoreArgs {
            roots: vec![tmp.path().join("missing")],
            dry_run: false,
        });
        assert!(matches!(result, Err(JxlBatchError::DirectoryNotFound { .. })));
    }
}
