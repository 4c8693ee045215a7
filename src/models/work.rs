//! # 转换任务数据模型
//!
//! ## 依赖关系
//! - 被 `batch/` 使用
//! - 无外部模块依赖

use clap::ValueEnum;
use std::path::PathBuf;

/// 输出文件名的主干截取方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum StemMode {
    /// Keep the text before the first '.' (`archive.v2.jxl` -> `archive`)
    #[default]
    FirstDot,
    /// Strip only the final extension (`archive.v2.jxl` -> `archive.v2`)
    LastDot,
}

impl StemMode {
    /// 从文件名中取出主干
    pub fn base_name<'a>(&self, file_name: &'a str) -> &'a str {
        let cut = match self {
            StemMode::FirstDot => file_name.find('.'),
            StemMode::LastDot => file_name.rfind('.'),
        };
        match cut {
            Some(idx) => &file_name[..idx],
            None => file_name,
        }
    }
}

impl std::fmt::Display for StemMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StemMode::FirstDot => write!(f, "first-dot"),
            StemMode::LastDot => write!(f, "last-dot"),
        }
    }
}

/// 单个待转换文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// 输入文件
    pub input: PathBuf,
    /// 镜像后的输出目录
    pub output_dir: PathBuf,
    /// 输出文件完整路径
    pub output: PathBuf,
}

/// 单个文件的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    Converted,
    /// 编码器非零退出或无法启动
    Failed(String),
}

impl ConversionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionStatus::Converted)
    }
}

/// 任务与其结果
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub item: WorkItem,
    pub status: ConversionStatus,
}
