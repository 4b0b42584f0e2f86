// Shared test helpers for integration tests
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// The version string the fake `qmake` shim reports. The scripted test
/// executables embed the same string, so normalization has something real
/// to mask.
pub const FAKE_QT_VERSION: &str = "6.9.1";

/// Creates an empty suite root in a temporary directory.
pub fn setup_suite_root() -> TempDir {
    tempdir().expect("Failed to create temporary suite root")
}

/// Writes `body` to `path` and marks it executable.
pub fn write_executable_script(path: &Path, body: &str) {
    fs::write(path, body).expect("Failed to write script");
    let mut perms = fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to mark script executable");
}

/// Installs a fake `qmake` in its own directory, answering
/// `-query QT_VERSION` with [`FAKE_QT_VERSION`]. The directory is kept
/// outside the suite root so the scanner never sees it.
///
/// Returns the guard for the shim directory and the directory path to
/// prepend to `PATH`.
pub fn install_qmake_shim() -> (TempDir, PathBuf) {
    let shim_dir = tempdir().expect("Failed to create qmake shim directory");
    let shim_path = shim_dir.path().join("qmake");
    let echo_version = format!("    echo {FAKE_QT_VERSION}");
    let body = [
        "#!/bin/sh",
        "if [ \"$1\" = \"-query\" ] && [ \"$2\" = \"QT_VERSION\" ]; then",
        echo_version.as_str(),
        "    exit 0",
        "fi",
        "exit 1",
        "",
    ]
    .join("\n");
    write_executable_script(&shim_path, &body);
    let dir = shim_dir.path().to_path_buf();
    (shim_dir, dir)
}

/// Builds a `PATH` value with the shim directory in front of the current one.
pub fn path_with_shim(shim_dir: &Path) -> String {
    format!(
        "{}:{}",
        shim_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

/// Adds a test subdirectory whose same-named executable is a shell script
/// emitting a small testlib-shaped report: the arguments it received, the
/// physical working directory, the fake Qt version, and a duration that
/// changes on every run (the script's pid), so that only normalization can
/// make consecutive runs byte-identical.
pub fn add_scripted_test(root: &Path, name: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create test subdirectory");
    let report_open = format!("echo \"<TestReport name=\\\"{name}\\\" args=\\\"$*\\\">\"");
    let environment = format!(
        "echo \"  <Environment version=\\\"{FAKE_QT_VERSION}\\\" cwd=\\\"$(pwd -P)\\\"/>\""
    );
    let body = [
        "#!/bin/sh",
        "echo '<?xml version=\"1.0\" encoding=\"UTF-8\"?>'",
        report_open.as_str(),
        environment.as_str(),
        "echo \"  <Duration msecs=\\\"$$\\\"/>\"",
        "echo \"</TestReport>\"",
        "",
    ]
    .join("\n");
    write_executable_script(&dir.join(name), &body);
}

/// Adds a subdirectory with no executable inside, which the tool must warn
/// about and skip.
pub fn add_empty_test_dir(root: &Path, name: &str) {
    fs::create_dir_all(root.join(name)).expect("Failed to create empty test subdirectory");
}
