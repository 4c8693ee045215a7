//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 转义目录名 -> 并行转换 -> 恢复目录名
//! - `scan`: 只列出将要转换的文件，不修改任何内容
//! - `restore`: 还原被中断运行遗留的转义目录名
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, scan, restore

pub mod convert;
pub mod restore;
pub mod scan;

use clap::{Parser, Subcommand};

/// jxlbatch - JPEG XL 目录树批量转换
#[derive(Parser)]
#[command(name = "jxlbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch-convert JPEG XL trees to JPEG, mirroring the directory structure", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert every matching file under the input tree into the output tree
    Convert(convert::ConvertArgs),

    /// List the files that would be converted and where they would go
    Scan(scan::ScanArgs),

    /// Rename escaped directories ([u<codepoint>]) back to their original names
    Restore(restore::RestoreArgs),
}
