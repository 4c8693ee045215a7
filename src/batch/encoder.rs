//! # 外部编码器调用
//!
//! 每个文件启动一次编码器子进程并等待其退出。标准输入输出全部丢弃，
//! 以退出码 0 判定成功。失败不重试、不报错，只通过返回值告知调用方。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/config.rs` 的 `EncoderConfig`

use crate::models::{ConversionStatus, EncoderConfig};

use std::path::Path;
use std::process::{Command, Stdio};

/// 单文件转换器
///
/// 多个 worker 共享同一实例，因此要求 `Sync`。
pub trait Encoder: Sync {
    fn encode(&self, input: &Path, output: &Path) -> ConversionStatus;
}

/// 调用 `djxl` 的转换器
#[derive(Debug, Clone)]
pub struct DjxlEncoder {
    config: EncoderConfig,
}

impl DjxlEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }
}

impl Encoder for DjxlEncoder {
    fn encode(&self, input: &Path, output: &Path) -> ConversionStatus {
        let program = self.config.program.display();
        tracing::debug!(%program, input = %input.display(), output = %output.display(), "launching encoder");

        let status = Command::new(&self.config.program)
            .args(self.config.args(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => ConversionStatus::Converted,
            Ok(status) => ConversionStatus::Failed(format!("{} exited with {}", program, status)),
            Err(e) => ConversionStatus::Failed(format!("failed to launch {}: {}", program, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn encoder(program: &str) -> DjxlEncoder {
        DjxlEncoder::new(EncoderConfig {
            program: PathBuf::from(program),
            quality: 90,
        })
    }

    #[test]
    fn test_missing_binary_is_a_failure_not_a_panic() {
        let status = encoder("jxlbatch-no-such-encoder").encode(Path::new("a.jxl"), Path::new("a.jpg"));
        match status {
            ConversionStatus::Failed(reason) => assert!(reason.contains("failed to launch")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_decides_success() {
        assert!(encoder("true")
            .encode(Path::new("a.jxl"), Path::new("a.jpg"))
            .is_success());
        assert!(!encoder("false")
            .encode(Path::new("a.jxl"), Path::new("a.jpg"))
            .is_success());
    }
}
