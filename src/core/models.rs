//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared across the regenerator:
//! the tests discovered in the suite root and the summary of a whole run.
//! Everything here is transient, recomputed on every invocation.
//!
//! 此模块定义再生成器共享的数据结构：
//! 在套件根目录下发现的测试以及整次运行的摘要。
//! 这里的一切都是瞬态的，每次调用都会重新计算。

use std::path::PathBuf;

/// A subdirectory of the suite root, paired with the executable the naming
/// convention expects inside it.
/// 套件根目录的一个子目录，以及命名约定所期望的其中的可执行文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTest {
    /// The subdirectory name, which is also the test name.
    /// 子目录名，同时也是测试名。
    pub name: String,
    /// The conventional executable path: `<name>/<name>` relative to the
    /// suite root (`.exe`-suffixed on Windows).
    /// 约定的可执行文件路径：相对于套件根目录的 `<name>/<name>`
    /// （在 Windows 上带 `.exe` 后缀）。
    pub executable: PathBuf,
    /// Whether that executable actually exists as a file.
    /// 该可执行文件是否真实存在。
    pub has_executable: bool,
}

/// Counters for the closing summary line of a run.
/// 用于运行结束摘要行的计数器。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Fixture files written, across all tests and formats.
    /// 写入的基准文件数，跨所有测试和格式。
    pub fixtures_written: usize,
    /// Directories skipped for lack of a test executable.
    /// 因缺少测试可执行文件而跳过的目录数。
    pub directories_skipped: usize,
}
