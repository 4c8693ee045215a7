//! # 运行配置
//!
//! 一次运行所需的全部进程级参数：输入/输出根目录、并行数、编码器参数、
//! 扩展名与文件名截断方式。启动时构造一次，之后以引用传递给各组件。
//!
//! ## 依赖关系
//! - 由 `commands/` 根据 CLI 参数构造
//! - 被 `batch/`, `names/` 读取

use crate::error::{JxlBatchError, Result};
use crate::models::work::StemMode;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 外部编码器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// 编码器可执行文件
    pub program: PathBuf,
    /// JPEG 质量 (1-100)
    pub quality: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            program: PathBuf::from("djxl"),
            quality: 90,
        }
    }
}

impl EncoderConfig {
    /// 生成单次调用的参数列表：`<src> --pixels_to_jpeg --jpeg_quality=<q> --quiet <dst>`
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            input.as_os_str().to_os_string(),
            OsString::from("--pixels_to_jpeg"),
            OsString::from(format!("--jpeg_quality={}", self.quality)),
            OsString::from("--quiet"),
            output.as_os_str().to_os_string(),
        ]
    }
}

/// 流水线配置
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    /// 并行 worker 数（0 = 自动）
    pub workers: usize,
    pub encoder: EncoderConfig,
    /// 源扩展名（不含点）
    pub source_ext: String,
    /// 目标扩展名（不含点）
    pub target_ext: String,
    pub stem_mode: StemMode,
}

impl PipelineConfig {
    /// 以默认参数创建配置
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input_root: input_root.into(),
            output_root: output_root.into(),
            workers: 0,
            encoder: EncoderConfig::default(),
            source_ext: "jxl".to_string(),
            target_ext: "jpg".to_string(),
            stem_mode: StemMode::FirstDot,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_encoder(mut self, encoder: EncoderConfig) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_extensions(mut self, source: &str, target: &str) -> Self {
        self.source_ext = source.to_string();
        self.target_ext = target.to_string();
        self
    }

    pub fn with_stem_mode(mut self, stem_mode: StemMode) -> Self {
        self.stem_mode = stem_mode;
        self
    }

    /// 检查参数合法性（不访问输出目录）
    pub fn validate(&self) -> Result<()> {
        if !self.input_root.is_dir() {
            return Err(JxlBatchError::DirectoryNotFound {
                path: self.input_root.display().to_string(),
            });
        }

        if !(1..=100).contains(&self.encoder.quality) {
            return Err(JxlBatchError::InvalidArgument(format!(
                "JPEG quality must be within 1-100, got {}",
                self.encoder.quality
            )));
        }

        for ext in [&self.source_ext, &self.target_ext] {
            if ext.is_empty() || ext.contains('.') || ext.contains(std::path::MAIN_SEPARATOR) {
                return Err(JxlBatchError::InvalidArgument(format!(
                    "Extension '{}' must be non-empty and contain no '.' or path separator",
                    ext
                )));
            }
        }

        Ok(())
    }

    /// 确认输出根目录不在输入树内部
    ///
    /// 输出目录必须已存在，两边都会被 canonicalize 后比较。
    pub fn check_disjoint_roots(&self) -> Result<()> {
        let input = canonical(&self.input_root)?;
        let output = canonical(&self.output_root)?;

        if output.starts_with(&input) {
            return Err(JxlBatchError::InvalidArgument(format!(
                "Output root '{}' must not be inside input root '{}'",
                self.output_root.display(),
                self.input_root.display()
            )));
        }

        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|_| JxlBatchError::DirectoryNotFound {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_encoder_args_template() {
        let encoder = EncoderConfig::default();
        let args = encoder.args(Path::new("in/a.jxl"), Path::new("out/a.jpg"));

        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(
            args,
            vec![
                "in/a.jxl",
                "--pixels_to_jpeg",
                "--jpeg_quality=90",
                "--quiet",
                "out/a.jpg"
            ]
        );
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let tmp = TempDir::new().unwrap();
        let config = PipelineConfig::new(tmp.path().join("missing"), tmp.path().join("out"));

        assert!(matches!(
            config.validate(),
            Err(JxlBatchError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_quality_and_extension() {
        let tmp = TempDir::new().unwrap();
        let bad_quality = PipelineConfig::new(tmp.path(), tmp.path().join("out")).with_encoder(
            EncoderConfig {
                quality: 0,
                ..EncoderConfig::default()
            },
        );
        assert!(bad_quality.validate().is_err());

        let bad_ext = PipelineConfig::new(tmp.path(), tmp.path().join("out"))
            .with_extensions(".jxl", "jpg");
        assert!(bad_ext.validate().is_err());

        let ok = PipelineConfig::new(tmp.path(), tmp.path().join("out"));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_output_inside_input_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir_all(input.join("out")).unwrap();
        fs::create_dir_all(tmp.path().join("elsewhere")).unwrap();

        let nested = PipelineConfig::new(&input, input.join("out"));
        assert!(nested.check_disjoint_roots().is_err());

        let sibling = PipelineConfig::new(&input, tmp.path().join("elsewhere"));
        assert!(sibling.check_disjoint_roots().is_ok());
    }
}
