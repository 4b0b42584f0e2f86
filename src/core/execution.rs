//! # Fixture Generation Engine Module / 基准生成引擎模块
//!
//! This module runs one discovered test executable once per report format,
//! captures its standard output, and persists the normalized result as the
//! format's fixture file. Executions are strictly sequential: each process
//! is fully awaited before the next is spawned.
//!
//! 此模块按每种报告格式运行一次已发现的测试可执行文件，
//! 捕获其标准输出，并将归一化结果持久化为该格式的基准文件。
//! 执行严格串行：每个进程都被完整等待后才派生下一个。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::{
    core::{
        config::{self, Format},
        models::DiscoveredTest,
        normalize::{self, Replacement},
    },
    infra::command,
};

/// Builds the argument vector for one (test, format) invocation: the format
/// flag first, then the extra-argument override split into words. The
/// executable path itself is the program, not part of the vector.
///
/// 为一次（测试，格式）调用构建参数向量：格式标志在前，
/// 随后是拆分为单词的额外参数覆盖。可执行文件路径本身是程序，
/// 不属于该向量。
pub fn command_args(test_name: &str, format: Format) -> Result<Vec<String>> {
    let mut args = vec![format.flag().to_string()];

    if let Some(extra) = config::extra_args_for(test_name) {
        let extra_args = shlex::split(extra).with_context(|| {
            format!("Malformed extra-argument override for test {test_name}: {extra}")
        })?;
        args.extend(extra_args);
    }

    Ok(args)
}

/// Writes a fixture file, truncating any previous content.
pub fn write_fixture(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Failed to write fixture file: {}", path.display()))
}

/// Regenerates all four fixtures for one test. For each format the test
/// executable is spawned with the suite root as working directory, its
/// stdout is decoded as UTF-8, written to `expected_<test>.<format>`, and
/// the file is normalized in place.
///
/// The exit status of the test executable is not inspected: a crashing test
/// still produces a fixture from whatever reached stdout.
///
/// # Arguments
/// * `test` - The discovered test to regenerate
/// * `root` - The suite root directory, also the fixture output directory
/// * `replacements` - The normalization substitutions for this run
///
/// # Returns
/// The number of fixture files written
///
/// 为一个测试重新生成全部四个基准文件。对每种格式，测试可执行文件以
/// 套件根目录为工作目录被派生，其 stdout 按 UTF-8 解码、
/// 写入 `expected_<test>.<format>`，随后文件被就地归一化。
///
/// 测试可执行文件的退出状态不被检查：崩溃的测试仍会用到达 stdout 的
/// 任何内容生成基准文件。
pub async fn generate_test_data(
    test: &DiscoveredTest,
    root: &Path,
    replacements: &[Replacement],
) -> Result<usize> {
    println!("{}", format!("  running {}", test.name).blue());

    let mut written = 0;
    for format in config::FORMATS {
        let args = command_args(&test.name, *format)?;

        let mut cmd = tokio::process::Command::new(&test.executable);
        cmd.args(&args).kill_on_drop(true).current_dir(root);

        let (status_res, raw) = command::capture_stdout(cmd).await;
        status_res.with_context(|| {
            format!("Failed to run test executable: {}", test.executable.display())
        })?;

        let output = command::decode_output(raw, &test.executable)?;

        let fixture_path = root.join(format.fixture_file_name(&test.name));
        write_fixture(&fixture_path, &output)?;
        normalize::normalize_file(&fixture_path, replacements)?;
        written += 1;
    }

    Ok(written)
}
