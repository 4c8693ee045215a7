//! # jxlbatch - JPEG XL 目录树批量转换
//!
//! 递归查找输入目录中的 .jxl 文件，调用外部编码器 (`djxl`) 转换为 .jpg，
//! 并在输出目录中保持相同的目录结构。编码器无法处理非 ASCII 路径，
//! 因此转换期间目录名会被临时转义，结束后恢复。
//!
//! ## 子命令
//! - `convert` - 完整的转换流程
//! - `scan`    - 只读预览
//! - `restore` - 恢复中断运行遗留的转义目录名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (收集、镜像、并行转换)
//!   │     ├── names/     (目录名转义与恢复)
//!   │     └── models/    (配置与任务模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod names;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            utils::output::print_error(&format!("  caused by: {}", cause));
            source = cause.source();
        }
        std::process::exit(1);
    }
}
