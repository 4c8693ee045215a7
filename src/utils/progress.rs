//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，以及多 worker 共享的完成计数。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .expect("progress template is valid")
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// 已完成条目计数
///
/// 每处理完一个条目（无论成败）调用一次 `advance`。
pub struct ProgressCounter {
    completed: AtomicUsize,
    total: usize,
    bar: ProgressBar,
}

impl ProgressCounter {
    /// 带终端进度条的计数器
    pub fn new(total: usize, message: &str) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
            bar: create_progress_bar(total as u64, message),
        }
    }

    /// 不显示任何输出的计数器
    pub fn hidden(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
            bar: ProgressBar::hidden(),
        }
    }

    /// 记录一个完成的条目，返回当前完成数
    pub fn advance(&self) -> usize {
        self.bar.inc(1);
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}
