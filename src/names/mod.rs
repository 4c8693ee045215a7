//! # 目录名处理模块
//!
//! 外部编码器无法处理非 ASCII 路径，因此转换前把目录名转义为 ASCII，
//! 转换后再按记录恢复。
//!
//! ## 流程
//! ```text
//! plan_escapes ─> RenameLog::apply ─> (转换) ─> restore_trees
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: escape, tree, record, sanitizer, restorer

pub mod escape;
pub mod record;
pub mod restorer;
pub mod sanitizer;
pub mod tree;

pub use record::RenameLog;
pub use restorer::{restore_trees, RestoreReport};
pub use sanitizer::{plan_decodes, plan_escapes};
pub use tree::{DirTree, OsTree};
