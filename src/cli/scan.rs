//! # scan 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::convert::TreeArgs;
use clap::Args;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Only print the summary, not every planned file
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}
