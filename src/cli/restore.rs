//! # restore 子命令 CLI 定义
//!
//! 用于 convert 在转义目录名之后中途失败的情况。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/restore.rs`

use clap::Args;
use std::path::PathBuf;

/// restore 子命令参数
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Directory trees to restore (typically the input and output roots)
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// Print the renames without applying them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
