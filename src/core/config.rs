//! # Suite Configuration Module / 套件配置模块
//!
//! This module defines the fixed configuration of the selftest suite: the
//! four report formats a test executable can emit, and the static table of
//! extra command-line arguments some tests need beyond the format selector.
//! Both are immutable for the lifetime of the process.
//!
//! 此模块定义自测套件的固定配置：测试可执行文件可以输出的四种报告格式，
//! 以及部分测试在格式选择器之外还需要的额外命令行参数静态表。
//! 两者在进程生命周期内均不可变。

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The token written into fixtures in place of the live Qt version string,
/// so that fixtures survive version bumps unchanged.
/// 写入基准文件以替代实际 Qt 版本字符串的占位符，
/// 使基准文件在版本升级后保持不变。
pub const VERSION_PLACEHOLDER: &str = "@INSERT_QT_VERSION_HERE@";

/// One of the report serializations a testlib executable can emit.
/// The variant order is the order fixtures are generated in.
/// testlib 可执行文件可以输出的报告序列化格式之一。
/// 变体顺序即基准文件的生成顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// The full XML report / 完整的 XML 报告
    Xml,
    /// The plain-text report / 纯文本报告
    Txt,
    /// The JUnit-style XML variant / JUnit 风格的 XML 变体
    XunitXml,
    /// The lightweight XML variant / 轻量级 XML 变体
    LightXml,
}

/// All supported formats, in generation order.
/// 所有支持的格式，按生成顺序排列。
pub const FORMATS: &[Format] = &[Format::Xml, Format::Txt, Format::XunitXml, Format::LightXml];

impl Format {
    /// The file extension used for fixtures of this format, which doubles
    /// as the format's name on the test executable's command line.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Txt => "txt",
            Format::XunitXml => "xunitxml",
            Format::LightXml => "lightxml",
        }
    }

    /// The leading command-line flag selecting this format, e.g. `-xml`.
    pub fn flag(&self) -> &'static str {
        match self {
            Format::Xml => "-xml",
            Format::Txt => "-txt",
            Format::XunitXml => "-xunitxml",
            Format::LightXml => "-lightxml",
        }
    }

    /// The conventional fixture file name for a test in this format:
    /// `expected_<test>.<extension>`.
    pub fn fixture_file_name(&self, test_name: &str) -> String {
        format!("expected_{}.{}", test_name, self.extension())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Extra arguments some tests require beyond the format selector, keyed by
/// test (subdirectory) name. Tests absent from the table run with the format
/// flag alone. The strings are split into an argument vector before use, so
/// multi-argument entries are fine.
///
/// 部分测试在格式选择器之外还需要的额外参数，以测试（子目录）名为键。
/// 不在表中的测试仅以格式标志运行。字符串在使用前会被拆分为参数向量，
/// 因此多参数条目没有问题。
static EXTRA_ARGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "commandlinedata",
            "fiveTablePasses fiveTablePasses:fiveTablePasses_data1 -v2",
        ),
        ("benchlibcallgrind", "-callgrind"),
        ("benchlibeventcounter", "-eventcounter"),
        ("benchliboptions", "-eventcounter"),
        ("benchlibtickcounter", "-tickcounter"),
        ("badxml", "-eventcounter"),
        ("benchlibcounting", "-eventcounter"),
        ("printdatatags", "-datatags"),
        ("printdatatagswithglobaltags", "-datatags"),
        ("silent", "-silent"),
        ("verbose1", "-v1"),
        ("verbose2", "-v2"),
    ])
});

/// Looks up the extra-argument override for a test, verbatim.
/// 按原样查找测试的额外参数覆盖。
pub fn extra_args_for(test_name: &str) -> Option<&'static str> {
    EXTRA_ARGS.get(test_name).copied()
}
