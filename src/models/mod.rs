//! # 数据模型模块
//!
//! 定义运行配置和转换任务的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `names/` 和 `commands/` 使用
//! - 子模块: config, work

pub mod config;
pub mod work;

pub use config::{EncoderConfig, PipelineConfig};
pub use work::{ConversionStatus, ItemOutcome, StemMode, WorkItem};
