//! # convert 子命令 CLI 定义
//!
//! 批量转换 .jxl -> .jpg，输出目录结构与输入一致。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/scan.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::models::{EncoderConfig, PipelineConfig, StemMode};

use clap::Args;
use std::path::PathBuf;

/// 输入/输出目录树参数（convert 与 scan 共用）
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Input directory tree
    #[arg(short, long, env = "JXLBATCH_INPUT")]
    pub input: PathBuf,

    /// Output directory tree (created if missing)
    #[arg(short, long, env = "JXLBATCH_OUTPUT")]
    pub output: PathBuf,

    /// Extension of the files to convert
    #[arg(long, default_value = "jxl")]
    pub source_ext: String,

    /// Extension given to converted files
    #[arg(long, default_value = "jpg")]
    pub target_ext: String,

    /// How the output base name is cut from the input file name
    #[arg(long, value_enum, default_value_t = StemMode::FirstDot)]
    pub stem: StemMode,
}

impl TreeArgs {
    /// 构造只包含目录树参数的配置
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.input, &self.output)
            .with_extensions(&self.source_ext, &self.target_ext)
            .with_stem_mode(self.stem)
    }
}

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Number of parallel workers (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "JXLBATCH_JOBS")]
    pub jobs: usize,

    /// Encoder executable
    #[arg(long, default_value = "djxl", env = "JXLBATCH_ENCODER")]
    pub encoder: PathBuf,

    /// JPEG quality passed to the encoder (1-100)
    #[arg(short, long, default_value_t = 90)]
    pub quality: u8,
}

impl ConvertArgs {
    /// 构造完整的运行配置
    pub fn to_config(&self) -> PipelineConfig {
        self.tree
            .to_config()
            .with_workers(self.jobs)
            .with_encoder(EncoderConfig {
                program: self.encoder.clone(),
                quality: self.quality,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["jxlbatch", "convert", "-i", "in", "-o", "out"]).unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        let config = args.to_config();

        assert_eq!(config.input_root, PathBuf::from("in"));
        assert_eq!(config.output_root, PathBuf::from("out"));
        assert_eq!(config.workers, 0);
        assert_eq!(config.encoder, EncoderConfig::default());
        assert_eq!(config.source_ext, "jxl");
        assert_eq!(config.target_ext, "jpg");
        assert_eq!(config.stem_mode, StemMode::FirstDot);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "jxlbatch", "convert", "-i", "in", "-o", "out", "-j", "24", "-q", "75", "--encoder",
            "/opt/djxl", "--stem", "last-dot",
        ])
        .unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        let config = args.to_config();

        assert_eq!(config.workers, 24);
        assert_eq!(config.encoder.quality, 75);
        assert_eq!(config.encoder.program, PathBuf::from("/opt/djxl"));
        assert_eq!(config.stem_mode, StemMode::LastDot);
    }
}
