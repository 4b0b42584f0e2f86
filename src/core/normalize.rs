//! # Output Normalization Module / 输出归一化模块
//!
//! This module rewrites freshly captured test output so that fixtures stay
//! byte-stable between runs and between machines. Three substitutions are
//! applied, in order, to every line: the live Qt version string becomes a
//! placeholder token, the absolute suite root path is removed, and elapsed
//! durations are forced to zero.
//!
//! 此模块重写新捕获的测试输出，使基准文件在多次运行之间、不同机器之间
//! 保持逐字节稳定。对每一行按顺序应用三个替换：实际的 Qt 版本字符串
//! 变为占位符、套件根目录的绝对路径被移除、耗时被强制归零。

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::config::VERSION_PLACEHOLDER;

/// A single ordered substitution: a compiled pattern and its replacement.
/// 单个有序替换：已编译的模式及其替换文本。
#[derive(Debug)]
pub struct Replacement {
    pattern: Regex,
    replacement: String,
}

impl Replacement {
    fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .with_context(|| format!("Invalid replacement pattern: {pattern}"))?,
            replacement: replacement.to_string(),
        })
    }

    /// Applies this replacement to every match in `line`.
    pub fn apply<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        self.pattern.replace_all(line, self.replacement.as_str())
    }
}

/// Builds the ordered replacement list for a run.
///
/// The version string and root path are matched literally (regex-escaped);
/// the duration mask matches any digit run in the `msecs` field. Lines
/// matching none of the patterns pass through unchanged, and every
/// replacement's output no longer matches its own pattern, so the whole
/// transform is idempotent.
///
/// 为一次运行构建有序替换列表。
///
/// 版本字符串和根路径按字面匹配（经过正则转义）；
/// 耗时掩码匹配 `msecs` 字段中的任意数字串。不匹配任何模式的行原样通过，
/// 且每个替换的输出不再匹配其自身模式，因此整个变换是幂等的。
pub fn build_replacements(qt_version: &str, root_path: &Path) -> Result<Vec<Replacement>> {
    let root = root_path
        .to_str()
        .with_context(|| format!("Suite root path is not valid UTF-8: {}", root_path.display()))?;

    Ok(vec![
        Replacement::new(&regex::escape(qt_version), VERSION_PLACEHOLDER)?,
        Replacement::new(&regex::escape(root), "")?,
        Replacement::new(r#"<Duration msecs="\d+"/>"#, r#"<Duration msecs="0"/>"#)?,
    ])
}

/// Runs every replacement, in order, over a single line.
/// 按顺序对单行运行所有替换。
pub fn apply_all(replacements: &[Replacement], line: &str) -> String {
    let mut current = line.to_string();
    for replacement in replacements {
        current = replacement.apply(&current).into_owned();
    }
    current
}

/// Normalizes a fixture file in place: the whole file is read, transformed
/// line by line, and written back in a single write. The trailing newline
/// state of the captured output is preserved.
///
/// 就地归一化基准文件：整个文件被读取、逐行变换，然后一次性写回。
/// 捕获输出的末尾换行状态保持不变。
pub fn normalize_file(path: &Path, replacements: &[Replacement]) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;

    let mut normalized = String::with_capacity(raw.len());
    for line in raw.split_inclusive('\n') {
        let (body, terminator) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        normalized.push_str(&apply_all(replacements, body));
        normalized.push_str(terminator);
    }

    fs::write(path, normalized)
        .with_context(|| format!("Failed to rewrite fixture file: {}", path.display()))
}
