//! # File System Operations Module / 文件系统操作模块
//!
//! This module scans the suite root for test subdirectories and resolves
//! the conventional executable path inside each of them.
//!
//! 此模块扫描套件根目录以查找测试子目录，
//! 并解析每个子目录中约定的可执行文件路径。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::DiscoveredTest;

/// Lists the names of the immediate child directories of `root`, sorted by
/// name so that fixture generation order is deterministic.
///
/// # Arguments
/// * `root` - The suite root directory
///
/// # Returns
/// The sorted directory names, or an error if the root cannot be read
pub fn subdirs(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read suite root directory: {}", root.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read an entry of: {}", root.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }
        // A name that is not UTF-8 cannot form a fixture file name.
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Forms the conventional executable path for a test: `<name>/<name>`
/// relative to the suite root, with an `.exe` suffix on Windows.
///
/// 构造测试的约定可执行文件路径：相对于套件根目录的 `<name>/<name>`，
/// 在 Windows 上带 `.exe` 后缀。
pub fn executable_path(root: &Path, test_name: &str) -> PathBuf {
    if cfg!(windows) {
        root.join(test_name).join(format!("{test_name}.exe"))
    } else {
        root.join(test_name).join(test_name)
    }
}

/// Scans the suite root and pairs every subdirectory with the executable
/// the naming convention expects, flagging whether it is present. The check
/// is a plain `is_file` test; execute permission is left to the spawn.
///
/// 扫描套件根目录，将每个子目录与命名约定所期望的可执行文件配对，
/// 并标记其是否存在。检查只是简单的 `is_file` 判断；
/// 执行权限留给进程派生时验证。
pub fn discover_tests(root: &Path) -> Result<Vec<DiscoveredTest>> {
    let tests = subdirs(root)?
        .into_iter()
        .map(|name| {
            let executable = executable_path(root, &name);
            let has_executable = executable.is_file();
            DiscoveredTest {
                name,
                executable,
                has_executable,
            }
        })
        .collect();

    Ok(tests)
}
