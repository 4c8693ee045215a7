//! # 批量执行器
//!
//! 将任务列表按轮转方式分成 N 批，每批由一个 worker 顺序处理，
//! N 个 worker 并行运行。
//!
//! ## 功能
//! - 轮转分批：第 k 批取下标 k, k+N, k+2N, ...
//! - 基于 rayon 线程池，每批一个 worker
//! - 共享计数器，每个条目无论成败计一次
//! - 收集每个条目的转换结果
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/encoder.rs` 执行单个转换
//! - 使用 `utils/progress.rs` 计数

use crate::batch::encoder::Encoder;
use crate::error::Result;
use crate::models::{ConversionStatus, ItemOutcome, WorkItem};
use crate::utils::progress::ProgressCounter;

use std::path::Path;

/// 按下标轮转分成 `n` 批（`n` 为 0 时按 1 处理）
pub fn partition<T>(items: Vec<T>, n: usize) -> Vec<Vec<T>> {
    let n = n.max(1);
    let mut batches: Vec<Vec<T>> = (0..n).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        batches[i % n].push(item);
    }
    batches
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 每个条目的结果（按 worker 分组，组内保持处理顺序）
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    /// 成功数量
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_success()).count()
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            ConversionStatus::Failed(reason) => Some((o.item.input.as_path(), reason.as_str())),
            ConversionStatus::Converted => None,
        })
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行 worker 数
    workers: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = CPU 逻辑核数）
    pub fn new(workers: usize) -> Self {
        let workers = if workers == 0 {
            num_cpus::get()
        } else {
            workers
        };
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// 并行处理全部任务，所有 worker 结束后返回
    pub fn run<E: Encoder>(
        &self,
        items: Vec<WorkItem>,
        encoder: &E,
        progress: &ProgressCounter,
    ) -> Result<BatchReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("jxlbatch-worker-{}", i))
            .build()?;

        let batches = partition(items, self.workers);
        let mut slots: Vec<Vec<ItemOutcome>> = (0..batches.len()).map(|_| Vec::new()).collect();

        pool.scope(|scope| {
            for (slot, batch) in slots.iter_mut().zip(batches) {
                scope.spawn(move |_| {
                    *slot = run_batch(batch, encoder, progress);
                });
            }
        });

        let mut report = BatchReport::default();
        for outcome in slots.into_iter().flatten() {
            report.merge(outcome);
        }
        Ok(report)
    }
}

/// 单个 worker：按顺序处理一批
fn run_batch<E: Encoder>(
    batch: Vec<WorkItem>,
    encoder: &E,
    progress: &ProgressCounter,
) -> Vec<ItemOutcome> {
    batch
        .into_iter()
        .map(|item| {
            let status = encoder.encode(&item.input, &item.output);
            if let ConversionStatus::Failed(reason) = &status {
                tracing::debug!(input = %item.input.display(), %reason, "conversion failed");
            }
            progress.advance();
            ItemOutcome { item, status }
        })
        .collect()
}
