use anyhow::{bail, Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Spawns a command and captures its standard output as raw bytes.
/// Standard error is left attached to the terminal so that a misbehaving
/// test executable stays visible while its report is being collected.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured standard output as a `Vec<u8>`.
///
/// 派生一个命令并以原始字节捕获其标准输出。
/// 标准错误仍连接到终端，这样在收集报告时，
/// 行为异常的测试可执行文件依然可见。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 捕获的标准输出，为一个 `Vec<u8>`。
pub async fn capture_stdout(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, Vec<u8>) {
    let mut child = match cmd.stdout(std::process::Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and no output.
            // 如果派生失败，我们返回错误且没有输出。
            return (Err(e), Vec::new());
        }
    };

    let mut stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture child stdout")),
                Vec::new(),
            );
        }
    };

    // Drain the pipe to EOF before waiting, so a chatty child never blocks
    // on a full pipe buffer.
    // 在等待退出之前先把管道读到 EOF，这样输出多的子进程不会因管道缓冲区
    // 写满而阻塞。
    let mut output = Vec::new();
    if let Err(e) = stdout.read_to_end(&mut output).await {
        return (Err(e), output);
    }

    let status = child.wait().await;

    (status, output)
}

/// Decodes captured subprocess output as strict UTF-8. Fixtures are text
/// files; a report that is not valid UTF-8 aborts the run.
///
/// 将捕获的子进程输出按严格 UTF-8 解码。基准文件是文本文件；
/// 非法 UTF-8 的报告会中止本次运行。
pub fn decode_output(raw: Vec<u8>, executable: &Path) -> Result<String> {
    String::from_utf8(raw)
        .with_context(|| format!("Output of {} is not valid UTF-8", executable.display()))
}

/// Queries the Qt build-configuration tool for the version string that will
/// be masked out of every fixture. Any failure here is fatal: without the
/// exact version string the normalizer cannot produce stable fixtures.
///
/// 向 Qt 构建配置工具查询将从每个基准文件中屏蔽掉的版本字符串。
/// 这里的任何失败都是致命的：没有精确的版本字符串，
/// 归一化器就无法产生稳定的基准文件。
pub async fn query_version() -> Result<String> {
    let mut cmd = tokio::process::Command::new("qmake");
    cmd.arg("-query").arg("QT_VERSION").kill_on_drop(true);

    let (status_res, raw) = capture_stdout(cmd).await;
    let status =
        status_res.context("Failed to run `qmake -query QT_VERSION`; is qmake on your PATH?")?;

    if !status.success() {
        bail!("`qmake -query QT_VERSION` exited with {status}");
    }

    let version = String::from_utf8(raw).context("qmake emitted a non-UTF-8 version string")?;
    let version = version.trim().to_string();
    if version.is_empty() {
        bail!("qmake reported an empty QT_VERSION");
    }

    Ok(version)
}
