//! # 批量处理模块
//!
//! 提供收集、规划和并行转换文件的能力。
//!
//! ## 功能
//! - 递归收集源文件
//! - 计算并预先创建镜像输出目录
//! - 调用外部编码器
//! - 轮转分批并行处理，进度计数
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod encoder;
pub mod mirror;
pub mod runner;

pub use collector::FileCollector;
pub use encoder::{DjxlEncoder, Encoder};
pub use runner::{BatchReport, BatchRunner};
