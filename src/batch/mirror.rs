//! # 输出目录镜像
//!
//! 把输入文件所在目录按相对路径映射到输出根目录下，并在转换开始前
//! 一次性创建所有需要的输出目录，避免多个 worker 同时创建同一目录。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/scan.rs` 调用
//! - 使用 `models/` 中的 `PipelineConfig`, `WorkItem`

use crate::error::{JxlBatchError, Result};
use crate::models::{PipelineConfig, WorkItem};

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// 计算 `file` 对应的输出目录
pub fn mirrored_dir(input_root: &Path, output_root: &Path, file: &Path) -> Result<PathBuf> {
    let parent = file.parent().unwrap_or(Path::new(""));
    let relative = parent
        .strip_prefix(input_root)
        .map_err(|_| JxlBatchError::OutsideRoot {
            path: file.display().to_string(),
            root: input_root.display().to_string(),
        })?;

    if relative.as_os_str().is_empty() {
        Ok(output_root.to_path_buf())
    } else {
        Ok(output_root.join(relative))
    }
}

/// 为输入文件生成转换任务
pub fn plan_item(config: &PipelineConfig, input: PathBuf) -> Result<WorkItem> {
    let output_dir = mirrored_dir(&config.input_root, &config.output_root, &input)?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let base = config.stem_mode.base_name(&file_name);
    let output = output_dir.join(format!("{}.{}", base, config.target_ext));

    Ok(WorkItem {
        input,
        output_dir,
        output,
    })
}

/// 创建所有任务的输出目录（含祖先目录），返回去重后的目录数
pub fn ensure_output_dirs(items: &[WorkItem]) -> Result<usize> {
    let dirs: BTreeSet<&Path> = items.iter().map(|item| item.output_dir.as_path()).collect();

    for dir in &dirs {
        fs::create_dir_all(dir).map_err(|e| JxlBatchError::DirectoryCreateError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    Ok(dirs.len())
}

/// 找出映射到同一输出文件的输入（例如 `a.v1.jxl` 与 `a.v2.jxl` 在 first-dot 模式下）
pub fn output_clashes(items: &[WorkItem]) -> Vec<(&Path, Vec<&Path>)> {
    let mut by_output: BTreeMap<&Path, Vec<&Path>> = BTreeMap::new();
    for item in items {
        by_output
            .entry(item.output.as_path())
            .or_default()
            .push(item.input.as_path());
    }
    by_output
        .into_iter()
        .filter(|(_, inputs)| inputs.len() > 1)
        .collect()
}
