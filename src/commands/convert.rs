//! # convert 命令实现
//!
//! 完整的批量转换流程。
//!
//! ## 流程
//! 1. 校验配置，创建输出根目录
//! 2. 转义输入树中的非 ASCII 目录名（失败即终止）
//! 3. 收集源文件，预先创建全部输出目录
//! 4. 轮转分批并行调用编码器（单个失败不终止）
//! 5. 恢复输入树与输出树的目录名（单个失败只报告）
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `names/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{mirror, BatchReport, BatchRunner, DjxlEncoder, Encoder, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::error::{JxlBatchError, Result};
use crate::models::PipelineConfig;
use crate::names::{plan_escapes, restore_trees, DirTree, OsTree, RenameLog, RestoreReport};
use crate::utils::output;
use crate::utils::progress::ProgressCounter;

use std::fs;

/// 一次运行的结果
#[derive(Debug)]
pub struct PipelineSummary {
    pub renames: RenameLog,
    pub batch: BatchReport,
    pub restore: RestoreReport,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = args.to_config();
    output::print_header(&format!(
        "Converting .{} -> .{}",
        config.source_ext, config.target_ext
    ));

    let encoder = DjxlEncoder::new(config.encoder.clone());
    let summary = run_pipeline(&config, &encoder, true)?;

    output::print_separator();
    for (input, reason) in summary.batch.failures() {
        output::print_warning(&format!("{}: {}", input.display(), reason));
    }
    output::print_done(&format!(
        "Converted {} of {} file(s) into '{}' ({} failed)",
        summary.batch.converted(),
        summary.batch.total(),
        config.output_root.display(),
        summary.batch.failed()
    ));
    if !summary.restore.is_clean() {
        output::print_warning(&format!(
            "{} directory name(s) could not be restored",
            summary.restore.failures.len()
        ));
    }

    Ok(())
}

/// 运行完整流水线
pub fn run_pipeline<E: Encoder>(
    config: &PipelineConfig,
    encoder: &E,
    show_progress: bool,
) -> Result<PipelineSummary> {
    config.validate()?;
    fs::create_dir_all(&config.output_root).map_err(|e| JxlBatchError::DirectoryCreateError {
        path: config.output_root.display().to_string(),
        source: e,
    })?;
    config.check_disjoint_roots()?;

    let mut tree = OsTree;
    let renames = sanitize_input(&mut tree, config)?;

    let batch = match convert_tree(config, encoder, show_progress) {
        Ok(batch) => batch,
        Err(e) => {
            if !renames.is_empty() {
                output::print_warning(&format!(
                    "Directory names under '{}' are still escaped; run `jxlbatch restore` to recover them",
                    config.input_root.display()
                ));
            }
            return Err(e);
        }
    };

    let restore = restore_trees(&mut tree, &renames, &config.input_root, &config.output_root);
    for path in &restore.skipped {
        output::print_skip(&format!("{} (nothing was converted there)", path.display()));
    }
    for failure in &restore.failures {
        output::print_error(&format!("{}: {}", failure.path.display(), failure.error));
    }

    Ok(PipelineSummary {
        renames,
        batch,
        restore,
    })
}

/// 转义输入树中的目录名并打印重命名列表
fn sanitize_input<T: DirTree>(tree: &mut T, config: &PipelineConfig) -> Result<RenameLog> {
    let plan = plan_escapes(&*tree, &config.input_root)?;

    if let Err(e) = plan.apply(tree) {
        if let JxlBatchError::PartialRename { applied, .. } = &e {
            output::print_warning(&format!(
                "Renaming stopped after {} directories; already renamed (new <- old):",
                applied
            ));
            for record in &plan.records()[..*applied] {
                output::print_rename(&record.sanitized, &record.original);
            }
        }
        return Err(e);
    }

    if plan.is_empty() {
        output::print_info("All directory names are ASCII");
    } else {
        output::print_info("(New name <- old name):");
        for record in &plan {
            output::print_rename(&record.sanitized, &record.original);
        }
    }

    Ok(plan)
}

/// 收集、规划并并行转换全部文件
fn convert_tree<E: Encoder>(
    config: &PipelineConfig,
    encoder: &E,
    show_progress: bool,
) -> Result<BatchReport> {
    let files = FileCollector::new(&config.input_root)
        .with_extension(&config.source_ext)
        .collect()?;
    output::print_info(&format!("Found {} files to convert", files.len()));

    let items = files
        .into_iter()
        .map(|file| mirror::plan_item(config, file))
        .collect::<Result<Vec<_>>>()?;

    for (target, inputs) in mirror::output_clashes(&items) {
        output::print_warning(&format!(
            "{} inputs map to '{}'; only the last one converted will remain",
            inputs.len(),
            target.display()
        ));
    }

    let dirs = mirror::ensure_output_dirs(&items)?;
    tracing::debug!(dirs, "created output directories");

    let progress = if show_progress {
        ProgressCounter::new(items.len(), "Converting")
    } else {
        ProgressCounter::hidden(items.len())
    };

    let runner = BatchRunner::new(config.workers);
    output::print_info(&format!(
        "Converting {} files with {} workers",
        progress.total(),
        runner.workers()
    ));

    let report = runner.run(items, encoder, &progress)?;
    progress.finish();
    tracing::debug!(completed = progress.completed(), "all workers finished");

    Ok(report)
}
