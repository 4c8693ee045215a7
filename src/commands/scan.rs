//! # scan 命令实现
//!
//! 只读预览：列出需要转义的目录、将要转换的文件及其输出位置。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `batch/mirror.rs`, `names/sanitizer.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{mirror, FileCollector};
use crate::cli::scan::ScanArgs;
use crate::error::Result;
use crate::models::{PipelineConfig, WorkItem};
use crate::names::{plan_escapes, OsTree, RenameLog};
use crate::utils::output;

use std::collections::BTreeSet;
use tabled::{Table, Tabled};

/// 预览表格行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
}

/// 预览结果
#[derive(Debug)]
pub struct ScanPlan {
    pub escapes: RenameLog,
    pub items: Vec<WorkItem>,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning Input Tree");

    let config = args.tree.to_config();
    let plan = build_plan(&config)?;

    if plan.escapes.is_empty() {
        output::print_info("All directory names are ASCII");
    } else {
        output::print_info(&format!(
            "{} directories would be escaped (new <- old):",
            plan.escapes.len()
        ));
        for record in &plan.escapes {
            output::print_rename(&record.sanitized, &record.original);
        }
    }

    if !args.summary && !plan.items.is_empty() {
        let rows: Vec<PlanRow> = plan
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| PlanRow {
                index: i + 1,
                input: item.input.display().to_string(),
                output: item.output.display().to_string(),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    for (target, inputs) in mirror::output_clashes(&plan.items) {
        output::print_warning(&format!(
            "{} inputs map to '{}'",
            inputs.len(),
            target.display()
        ));
    }

    let dirs: BTreeSet<_> = plan.items.iter().map(|item| &item.output_dir).collect();
    output::print_done(&format!(
        "{} file(s) would be converted into {} director(ies) under '{}'",
        plan.items.len(),
        dirs.len(),
        config.output_root.display()
    ));

    Ok(())
}

/// 计算完整的转换计划，不修改文件系统
pub fn build_plan(config: &PipelineConfig) -> Result<ScanPlan> {
    config.validate()?;

    let escapes = plan_escapes(&OsTree, &config.input_root)?;
    let items = FileCollector::new(&config.input_root)
        .with_extension(&config.source_ext)
        .collect()?
        .into_iter()
        .map(|file| mirror::plan_item(config, file))
        .collect::<Result<Vec<_>>>()?;

    Ok(ScanPlan { escapes, items })
}
