//! # 目录名转义
//!
//! 将非 ASCII 字符逐个替换为 `[u<十进制码点>]`，例如 `café` -> `caf[u233]`。
//!
//! 解码只还原非 ASCII 码点的标记；若原名本身就含有形如 `[u233]` 的 ASCII
//! 文本，则编码后无法区分，解码结果会与原名不同。正常的恢复流程依赖
//! `RenameLog` 中记录的原始路径，不受此限制。
//!
//! ## 依赖关系
//! - 被 `names/sanitizer.rs` 使用
//! - 使用 `regex` 识别转义标记

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\[u(\d+)\]").expect("escape token pattern is valid"))
}

/// 转义目录名；纯 ASCII 名称原样返回
pub fn escape_name(name: &str) -> Cow<'_, str> {
    if name.is_ascii() {
        return Cow::Borrowed(name);
    }

    let mut escaped = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            // 写入 String 不会失败
            let _ = write!(escaped, "[u{}]", c as u32);
        }
    }
    Cow::Owned(escaped)
}

/// 还原 `escape_name` 的结果
pub fn unescape_name(name: &str) -> Cow<'_, str> {
    token_pattern().replace_all(name, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .filter(|c| !c.is_ascii())
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_names_are_untouched() {
        for name in ["photos", "2024-01 trip", "a.b_c", ""] {
            assert!(matches!(escape_name(name), Cow::Borrowed(_)));
            assert_eq!(escape_name(name), name);
        }
    }

    #[test]
    fn test_escape_replaces_each_char() {
        assert_eq!(escape_name("café"), "caf[u233]");
        assert_eq!(escape_name("日本"), "[u26085][u26412]");
        assert_eq!(escape_name("a😀b"), "a[u128512]b");
    }

    #[test]
    fn test_escaped_names_are_ascii() {
        for name in ["café", "Ünïcödé dir", "写真 2023", "ñ/"] {
            assert!(escape_name(name).is_ascii());
        }
    }

    #[test]
    fn test_round_trip() {
        for name in ["café", "Ünïcödé dir", "写真 2023", "mixed-ÄÖÜ-äöü", "😀"] {
            let escaped = escape_name(name);
            assert_eq!(unescape_name(&escaped), name);
        }
    }

    #[test]
    fn test_unescape_leaves_ascii_tokens_and_garbage() {
        assert_eq!(unescape_name("[u65]"), "[u65]");
        assert_eq!(unescape_name("[u99999999999]"), "[u99999999999]");
        assert_eq!(unescape_name("[u55296]"), "[u55296]");
        assert_eq!(unescape_name("plain"), "plain");
    }
}
